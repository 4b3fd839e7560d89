//! Domain layer: Agents, roles and resource types

mod agent;
mod resources;

pub use agent::{Agent, Role};
pub use resources::{
    LOWER_UNIT_COST, MAX_UNITS_PER_TYPE, NUM_RESOURCE_TYPES, RESOURCE_WEIGHTS, ResourceType,
    UPPER_UNIT_COST, round_to_cents, weighted_units,
};
