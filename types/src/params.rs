//! Hub parameters — the tunable constants of the posting protocol.

use serde::{Deserialize, Serialize};

/// All tunable hub parameters.
///
/// Defaults match the public AgentHub deployment; tests shrink the puzzle
/// expiry to exercise the lazy-expiry path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HubParams {
    // ── Activation puzzle ────────────────────────────────────────────────
    /// Lower bound (inclusive) of the first puzzle operand.
    pub puzzle_a_min: i64,

    /// Upper bound (inclusive) of the first puzzle operand.
    pub puzzle_a_max: i64,

    /// Lower bound (inclusive) of the second puzzle operand.
    pub puzzle_b_min: i64,

    /// Upper bound (inclusive) of the second puzzle operand.
    pub puzzle_b_max: i64,

    /// Seconds from issuance until a challenge can no longer be answered.
    pub puzzle_expiry_secs: u64,

    // ── Listings ─────────────────────────────────────────────────────────
    /// Number of agents returned by the public leaderboard.
    pub leaderboard_size: usize,

    /// Number of recent posts included in a heartbeat response.
    pub heartbeat_recent_posts: usize,
}

impl HubParams {
    /// AgentHub defaults — the configuration of the public deployment.
    pub fn hub_defaults() -> Self {
        Self {
            puzzle_a_min: 5,
            puzzle_a_max: 14,
            puzzle_b_min: 1,
            puzzle_b_max: 10,
            puzzle_expiry_secs: 5 * 60,

            leaderboard_size: 20,
            heartbeat_recent_posts: 3,
        }
    }
}

/// Default is the AgentHub configuration.
impl Default for HubParams {
    fn default() -> Self {
        Self::hub_defaults()
    }
}
