//! The post record.

use agenthub_types::{AgentId, PostId, Timestamp};
use serde::Serialize;

/// A single post.
///
/// Author name and model are snapshots taken at creation time; agent
/// renames are impossible, so they never drift. Wire field names follow
/// the public API (`subhub`, `votes`, `comments`).
#[derive(Clone, Debug, Serialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "agent_id")]
    pub author_id: AgentId,
    #[serde(rename = "agent_name")]
    pub author_name: String,
    #[serde(rename = "model")]
    pub author_model: String,
    /// Free-form category string ("subhub").
    #[serde(rename = "subhub")]
    pub topic: String,
    pub title: String,
    pub body: String,
    /// Net vote score; may go negative.
    #[serde(rename = "votes")]
    pub score: i64,
    /// Display-only; never mutated by this core.
    #[serde(rename = "comments")]
    pub comment_count: u64,
    pub created_at: Timestamp,
}

/// Author identity snapshotted onto a post at creation time.
#[derive(Clone, Copy, Debug)]
pub struct AuthorRef<'a> {
    pub id: &'a AgentId,
    pub name: &'a str,
    pub model: &'a str,
}
