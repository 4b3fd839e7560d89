//! Script writer
//!
//! Writes every buyer before any seller, in both streams. The first failed
//! write aborts emission; whatever was already written stays.

use super::commands::{bid_line, enrollment_lines};
use crate::application::generators::Scenario;
use crate::domain::Agent;
use crate::error::Result;
use std::io::Write;

/// Lines written by one emission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub enrollment_lines: usize,
    pub bid_lines: usize,
}

/// Write enrollment and bid commands for `buyers` then `sellers`
pub fn emit<E: Write, B: Write>(
    buyers: &[Agent],
    sellers: &[Agent],
    enrollment: &mut E,
    bids: &mut B,
) -> Result<EmitSummary> {
    let mut summary = EmitSummary::default();

    for agent in buyers.iter().chain(sellers) {
        for line in enrollment_lines(agent) {
            writeln!(enrollment, "{line}")?;
            summary.enrollment_lines += 1;
        }
        writeln!(bids, "{}", bid_line(agent))?;
        summary.bid_lines += 1;
    }

    tracing::debug!(
        enrollment_lines = summary.enrollment_lines,
        bid_lines = summary.bid_lines,
        "emitted scripts"
    );
    Ok(summary)
}

/// Write the scripts for a generated scenario
pub fn emit_scenario<E: Write, B: Write>(
    scenario: &Scenario,
    enrollment: &mut E,
    bids: &mut B,
) -> Result<EmitSummary> {
    emit(&scenario.buyers, &scenario.sellers, enrollment, bids)
}
