//! Scenario generator
//!
//! Turns a population size into ordered buyer and seller agents.

use super::{GenerationConfig, SampledPopulation};
use crate::domain::{Agent, Role};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Hand-specified `(quantity, price)` for the first buyers
const FIXED_BUYERS: [(u32, f64); 2] = [(2, 6.5), (4, 11.0)];

/// Hand-specified `(quantity, price)` for the first sellers
const FIXED_SELLERS: [(u32, f64); 2] = [(3, 6.5), (2, 11.0)];

/// Generated agents, buyers and sellers each ascending by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub buyers: Vec<Agent>,
    pub sellers: Vec<Agent>,
}

impl Scenario {
    /// All agents, buyers first
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.buyers.iter().chain(self.sellers.iter())
    }

    pub fn len(&self) -> usize {
        self.buyers.len() + self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scenario generator
///
/// Owns a seeded random number generator, so two generators built with the
/// same seed sample identical populations.
pub struct ScenarioGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Build agents from the sampled matrices instead of the fixed pairs
    use_sampled_values: bool,
}

impl ScenarioGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            use_sampled_values: false,
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            use_sampled_values: false,
        }
    }

    /// Create a generator from configuration
    pub fn from_config(config: &GenerationConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        };
        generator.with_sampled_values(config.use_sampled_values)
    }

    /// Set sampled-agent mode (builder pattern)
    pub fn with_sampled_values(mut self, enabled: bool) -> Self {
        self.use_sampled_values = enabled;
        self
    }

    pub fn uses_sampled_values(&self) -> bool {
        self.use_sampled_values
    }

    /// Generate the agents for a population
    ///
    /// The full population is always sampled. Without sampled values only the
    /// first two buyers and first two sellers are materialized, with fixed
    /// quantities and prices.
    pub fn generate(&mut self, buyer_count: usize, seller_count: usize) -> Scenario {
        let population = SampledPopulation::sample(&mut self.rng, buyer_count, seller_count);
        tracing::debug!(
            buyers = population.buyer_count(),
            sellers = population.seller_count(),
            "sampled population"
        );

        let scenario = if self.use_sampled_values {
            Self::from_population(&population)
        } else {
            Self::fixed(buyer_count, seller_count)
        };

        tracing::info!(
            buyers = scenario.buyers.len(),
            sellers = scenario.sellers.len(),
            sampled = self.use_sampled_values,
            "generated scenario"
        );
        scenario
    }

    /// Fixed agents for the first two indices of each role
    fn fixed(buyer_count: usize, seller_count: usize) -> Scenario {
        Scenario {
            buyers: Self::fixed_agents(Role::Buyer, &FIXED_BUYERS, buyer_count),
            sellers: Self::fixed_agents(Role::Seller, &FIXED_SELLERS, seller_count),
        }
    }

    fn fixed_agents(role: Role, table: &[(u32, f64)], count: usize) -> Vec<Agent> {
        table
            .iter()
            .take(count)
            .zip(1..)
            .map(|(&(quantity, price), id)| Agent::new(role, id, quantity, price))
            .collect()
    }

    /// One agent per sampled buyer and seller
    fn from_population(population: &SampledPopulation) -> Scenario {
        let buyers = (0..population.buyer_count())
            .zip(1..)
            .map(|(idx, id)| {
                Agent::buyer(id, population.buyer_units(idx), population.buyer_prices[idx])
            })
            .collect();

        let sellers = (0..population.seller_count())
            .zip(1..)
            .map(|(idx, id)| {
                Agent::seller(id, population.seller_units(idx), population.seller_unit_ask(idx))
            })
            .collect();

        Scenario { buyers, sellers }
    }
}
