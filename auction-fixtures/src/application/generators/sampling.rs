//! Population sampling
//!
//! Draws the need/provision matrices and valuations for a whole population.
//! Draw order is fixed (quantities per resource type, buyer unit costs, buyer
//! price scales, seller prices) so a seed always yields the same population.

use crate::domain::{
    LOWER_UNIT_COST, MAX_UNITS_PER_TYPE, NUM_RESOURCE_TYPES, ResourceType, UPPER_UNIT_COST,
    round_to_cents, weighted_units,
};
use rand::Rng;
use rand_distr::Uniform;

/// Sampled resource matrices for a population
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPopulation {
    /// Units of each resource type each buyer needs
    pub buyer_needs: Vec<[u32; NUM_RESOURCE_TYPES]>,
    /// Per-unit cost of each resource type for each buyer
    pub buyer_unit_costs: Vec<[f64; NUM_RESOURCE_TYPES]>,
    /// Aggregate buyer valuation, rounded to cents
    pub buyer_prices: Vec<f64>,
    /// Units of each resource type each seller provides
    pub seller_provision: Vec<[u32; NUM_RESOURCE_TYPES]>,
    /// Per-unit ask of each resource type for each seller, rounded to cents
    pub seller_prices: Vec<[f64; NUM_RESOURCE_TYPES]>,
}

impl SampledPopulation {
    /// Sample a population of `buyer_count` buyers and `seller_count` sellers
    pub fn sample<R: Rng>(rng: &mut R, buyer_count: usize, seller_count: usize) -> Self {
        // 1. Quantities, U[0, 10) per (agent, resource type)
        let units = Uniform::new(0, MAX_UNITS_PER_TYPE);
        let mut buyer_needs = vec![[0u32; NUM_RESOURCE_TYPES]; buyer_count];
        let mut seller_provision = vec![[0u32; NUM_RESOURCE_TYPES]; seller_count];
        for resource in ResourceType::ALL {
            let col = resource.index();
            for row in buyer_needs.iter_mut() {
                row[col] = rng.sample(&units);
            }
            for row in seller_provision.iter_mut() {
                row[col] = rng.sample(&units);
            }
        }

        // 2. Buyer unit costs from the per-type ranges
        let mut buyer_unit_costs = vec![[0.0; NUM_RESOURCE_TYPES]; buyer_count];
        for resource in ResourceType::ALL {
            let (low, high) = resource.cost_range();
            let cost = Uniform::new(low, high);
            for row in buyer_unit_costs.iter_mut() {
                row[resource.index()] = rng.sample(&cost);
            }
        }

        // 3. Buyer valuation: U[0.1, 0.2) scaled by the weighted need
        let scale = Uniform::new(LOWER_UNIT_COST, UPPER_UNIT_COST);
        let buyer_prices = buyer_needs
            .iter()
            .map(|row| round_to_cents(rng.sample(&scale) * weighted_units(row) as f64))
            .collect();

        // 4. Seller asks from the same per-type ranges
        let mut seller_prices = vec![[0.0; NUM_RESOURCE_TYPES]; seller_count];
        for resource in ResourceType::ALL {
            let (low, high) = resource.cost_range();
            let ask = Uniform::new(low, high);
            for row in seller_prices.iter_mut() {
                row[resource.index()] = round_to_cents(rng.sample(&ask));
            }
        }

        Self {
            buyer_needs,
            buyer_unit_costs,
            buyer_prices,
            seller_provision,
            seller_prices,
        }
    }

    pub fn buyer_count(&self) -> usize {
        self.buyer_needs.len()
    }

    pub fn seller_count(&self) -> usize {
        self.seller_provision.len()
    }

    /// Total units buyer `idx` needs across all resource types
    pub fn buyer_units(&self, idx: usize) -> u32 {
        self.buyer_needs[idx].iter().sum()
    }

    /// Total units seller `idx` provides across all resource types
    pub fn seller_units(&self, idx: usize) -> u32 {
        self.seller_provision[idx].iter().sum()
    }

    /// Quantity-weighted per-unit ask of seller `idx`, rounded to cents
    ///
    /// Falls back to the basic resource ask when the seller provides nothing.
    pub fn seller_unit_ask(&self, idx: usize) -> f64 {
        let units = self.seller_units(idx);
        let prices = &self.seller_prices[idx];
        if units == 0 {
            return prices[ResourceType::Basic.index()];
        }

        let total: f64 = self.seller_provision[idx]
            .iter()
            .zip(prices.iter())
            .map(|(&q, &p)| q as f64 * p)
            .sum();
        round_to_cents(total / units as f64)
    }
}
