use agenthub_types::{AgentId, PostId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VotingError {
    #[error("already voted on this post")]
    DuplicateVote { agent: AgentId, post: PostId },
}
