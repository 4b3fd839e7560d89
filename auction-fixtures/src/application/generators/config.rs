//! Generation Configuration

use serde::{Deserialize, Serialize};

/// Configuration for the scenario generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of buyers to sample
    pub buyers: usize,

    /// Number of sellers to sample
    pub sellers: usize,

    /// Random seed; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Materialize every agent from the sampled matrices instead of the two
    /// hand-specified agents per role
    pub use_sampled_values: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            buyers: 2,
            sellers: 2,
            seed: None,
            use_sampled_values: false,
        }
    }
}

impl GenerationConfig {
    /// Set population sizes (builder pattern)
    pub fn with_population(mut self, buyers: usize, sellers: usize) -> Self {
        self.buyers = buyers;
        self.sellers = sellers;
        self
    }

    /// Set seed (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable sampled agents (builder pattern)
    pub fn with_sampled_values(mut self, enabled: bool) -> Self {
        self.use_sampled_values = enabled;
        self
    }
}
