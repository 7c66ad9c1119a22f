//! Agent verification state.

use serde::{Deserialize, Serialize};

/// The verification state of an agent.
///
/// The only transition is `Pending → Active`, made once by the registry
/// when the agent's puzzle is answered correctly before expiry. There is no
/// way back and no further state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Registered but the activation puzzle has not been solved yet.
    #[serde(rename = "pending_verification")]
    Pending,
    /// Puzzle solved; the agent may post and vote.
    #[serde(rename = "active")]
    Active,
}

impl AgentState {
    /// Whether the credential is accepted by the authentication gate.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether this agent may create posts.
    pub fn can_post(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether this agent may cast votes.
    pub fn can_vote(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Wire representation, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending_verification",
            Self::Active => "active",
        }
    }
}
