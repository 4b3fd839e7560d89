//! Configuration loading for the fixture generator
//!
//! A JSON file may set any subset of the fields; the rest keep the defaults,
//! which reproduce the original benchmark run (2 buyers, 2 sellers, fixed
//! agents, `accountReg.sh` and `bidConfig.sh`).

use crate::application::generators::GenerationConfig;
use crate::error::{FixtureError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default enrollment script path
pub const DEFAULT_ENROLLMENT_PATH: &str = "accountReg.sh";

/// Default bid script path
pub const DEFAULT_BID_PATH: &str = "bidConfig.sh";

/// Keys recognized in a config file
pub const CONFIG_KEYS: [&str; 6] = [
    "buyers",
    "sellers",
    "seed",
    "use_sampled_values",
    "enrollment_path",
    "bid_path",
];

/// Root configuration for a fixture run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Population and sampling settings
    #[serde(flatten)]
    pub generation: GenerationConfig,

    /// Enrollment script output
    #[serde(default = "default_enrollment_path")]
    pub enrollment_path: PathBuf,

    /// Bid script output
    #[serde(default = "default_bid_path")]
    pub bid_path: PathBuf,
}

fn default_enrollment_path() -> PathBuf {
    PathBuf::from(DEFAULT_ENROLLMENT_PATH)
}

fn default_bid_path() -> PathBuf {
    PathBuf::from(DEFAULT_BID_PATH)
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            enrollment_path: default_enrollment_path(),
            bid_path: default_bid_path(),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| FixtureError::ConfigIo {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    ///
    /// Unknown keys are ignored with a warning.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| FixtureError::Config(e.to_string()))?;
        for key in unknown_keys(&value) {
            tracing::warn!(%key, "ignoring unknown config key");
        }

        serde_json::from_value(value).map_err(|e| FixtureError::Config(e.to_string()))
    }

    /// Set output paths (builder pattern)
    pub fn with_outputs(mut self, enrollment: impl Into<PathBuf>, bids: impl Into<PathBuf>) -> Self {
        self.enrollment_path = enrollment.into();
        self.bid_path = bids.into();
        self
    }

    /// Set generation settings (builder pattern)
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }
}

/// Top-level keys of a config document that are not in [`CONFIG_KEYS`]
pub fn unknown_keys(value: &serde_json::Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| {
            map.keys()
                .filter(|key| !CONFIG_KEYS.contains(&key.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
