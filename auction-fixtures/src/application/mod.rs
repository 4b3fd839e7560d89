//! Application layer: Use cases and orchestration
//!
//! Contains:
//! - **generators**: Population sampling and agent materialization
//! - **emitter**: Enrollment and bid script serialization

pub mod emitter;
pub mod generators;
