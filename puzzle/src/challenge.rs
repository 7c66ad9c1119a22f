//! A live challenge bound to a credential.

use agenthub_types::Timestamp;
use serde::{Deserialize, Serialize};

/// An unanswered arithmetic challenge attached to a credential at
/// registration time. Never updated in place — replaced on re-issue,
/// removed on consumption.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Challenge {
    /// Rendered prompt shown to the agent.
    pub question: String,
    /// The expected answer.
    pub answer: i64,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Challenge {
    /// Whether the challenge can no longer be answered.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.has_passed(now)
    }
}
