//! Client command lines

use crate::domain::Agent;

/// Directory of the client programs, relative to where the scripts run
pub const CLIENT_DIR: &str = "..";

/// Identity enrollment program
pub const ENROLL_SCRIPT: &str = "registerEnrollUser.js";

/// Account registration program
pub const ACCOUNT_SCRIPT: &str = "registerAccount.js";

/// Bid submission program
pub const BID_SCRIPT: &str = "bid.js";

/// Auction id argument, left as a positional parameter of the bid script
pub const AUCTION_ID_MARKER: &str = "$1";

/// Enrollment and account registration commands for an agent
pub fn enrollment_lines(agent: &Agent) -> [String; 2] {
    let org = agent.role().organization();
    let user = agent.user_name();
    [
        format!("node {CLIENT_DIR}/{ENROLL_SCRIPT} {org} {user}"),
        format!("node {CLIENT_DIR}/{ACCOUNT_SCRIPT} {org} {user}"),
    ]
}

/// Bid submission command for an agent
pub fn bid_line(agent: &Agent) -> String {
    format!(
        "node {CLIENT_DIR}/{BID_SCRIPT} {} {} {AUCTION_ID_MARKER} {} {}",
        agent.role().organization(),
        agent.user_name(),
        agent.price_field(),
        agent.quantity()
    )
}
