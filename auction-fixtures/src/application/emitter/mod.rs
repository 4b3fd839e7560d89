//! Script emission
//!
//! Serializes agents into the enrollment script and the bid script consumed
//! by the blockchain test client.

mod commands;
mod script;

pub use commands::{
    ACCOUNT_SCRIPT, AUCTION_ID_MARKER, BID_SCRIPT, CLIENT_DIR, ENROLL_SCRIPT, bid_line,
    enrollment_lines,
};
pub use script::{EmitSummary, emit, emit_scenario};
