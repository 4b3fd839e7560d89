//! Resource types
//!
//! The auction trades three kinds of resource. Each kind has an importance
//! weight and a per-unit cost range; every range starts where the previous one
//! ends and is twice as wide.

/// Number of resource types in a bid
pub const NUM_RESOURCE_TYPES: usize = 3;

/// Importance weight per resource type (indexed by [`ResourceType::index`])
pub const RESOURCE_WEIGHTS: [u32; NUM_RESOURCE_TYPES] = [1, 2, 4];

/// Exclusive upper bound on the units of one type an agent needs or provides
pub const MAX_UNITS_PER_TYPE: u32 = 10;

/// Lower bound of the cheapest unit cost range
pub const LOWER_UNIT_COST: f64 = 0.1;

/// Upper bound of the cheapest unit cost range
pub const UPPER_UNIT_COST: f64 = 0.2;

/// A tradeable resource category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Basic,
    Standard,
    Premium,
}

impl ResourceType {
    /// All resource types in index order
    pub const ALL: [ResourceType; NUM_RESOURCE_TYPES] =
        [ResourceType::Basic, ResourceType::Standard, ResourceType::Premium];

    /// Column index of this type in need/provision rows
    pub fn index(self) -> usize {
        match self {
            ResourceType::Basic => 0,
            ResourceType::Standard => 1,
            ResourceType::Premium => 2,
        }
    }

    /// Importance weight used for buyer valuations
    pub fn weight(self) -> u32 {
        RESOURCE_WEIGHTS[self.index()]
    }

    /// Half-open `[low, high)` per-unit cost range
    pub fn cost_range(self) -> (f64, f64) {
        match self {
            ResourceType::Basic => (LOWER_UNIT_COST, UPPER_UNIT_COST),
            ResourceType::Standard => (UPPER_UNIT_COST, UPPER_UNIT_COST * 2.0),
            ResourceType::Premium => (UPPER_UNIT_COST * 2.0, UPPER_UNIT_COST * 4.0),
        }
    }
}

/// Dot product of a unit row with the importance weights
pub fn weighted_units(row: &[u32; NUM_RESOURCE_TYPES]) -> u32 {
    ResourceType::ALL
        .iter()
        .map(|r| row[r.index()] * r.weight())
        .sum()
}

/// Round to 2 decimal places, ties to even
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
