//! Infrastructure layer: Configuration loading and script files

mod config;
mod script_files;

pub use config::{
    CONFIG_KEYS, DEFAULT_BID_PATH, DEFAULT_ENROLLMENT_PATH, FixtureConfig, unknown_keys,
};
pub use script_files::ScriptFiles;
