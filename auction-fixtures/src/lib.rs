//! Double-auction fixture generator
//!
//! Samples buyer and seller populations for the double-auction benchmark and
//! writes the client scripts that enroll the agents and submit their bids.
//!
//! ```no_run
//! use auction_fixtures::{ScenarioGenerator, ScriptFiles};
//!
//! let scenario = ScenarioGenerator::new(42).generate(2, 2);
//! ScriptFiles::create("accountReg.sh", "bidConfig.sh")?.write(&scenario)?;
//! # Ok::<(), auction_fixtures::FixtureError>(())
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-export key types at crate root
pub use application::emitter::{EmitSummary, emit, emit_scenario};
pub use application::generators::{
    GenerationConfig, SampledPopulation, Scenario, ScenarioGenerator,
};
pub use domain::{Agent, ResourceType, Role};
pub use error::{FixtureError, Result};
pub use infrastructure::{FixtureConfig, ScriptFiles};
