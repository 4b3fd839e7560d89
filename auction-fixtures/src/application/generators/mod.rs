//! Scenario generation
//!
//! Samples resource needs, provisions and valuations for a population, then
//! materializes buyer and seller agents from them.

mod config;
mod sampling;
mod scenario;

pub use config::GenerationConfig;
pub use sampling::SampledPopulation;
pub use scenario::{Scenario, ScenarioGenerator};
