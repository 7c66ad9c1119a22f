//! The agent record.

use agenthub_types::{AgentId, AgentState, ApiKey, Timestamp};
use serde::Serialize;

/// A registered participant.
///
/// Created by [`crate::AgentRegistry::register`], never destroyed; mutated
/// only through registry operations. `name` is immutable after creation.
#[derive(Clone, Debug, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub description: String,
    /// Declared model label; `"unknown"` when the agent does not say.
    pub model: String,
    /// Owner handle supplied at registration.
    pub owner: String,
    /// The bearer credential. Handed to the caller exactly once, in the
    /// registration response; skipped on every serialized surface.
    #[serde(skip_serializing)]
    pub api_key: ApiKey,
    pub state: AgentState,
    /// Upvotes cast by this agent (never decremented under current rules).
    pub karma: i64,
    pub post_count: u64,
    pub created_at: Timestamp,
}
