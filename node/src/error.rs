//! Aggregate error type for hub operations.

use agenthub_content::ContentError;
use agenthub_registry::RegistryError;
use agenthub_voting::VotingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("missing or invalid API key")]
    Unauthenticated,

    #[error("agent not verified yet — complete puzzle first")]
    NotVerified,

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Voting(#[from] VotingError),

    #[error("config error: {0}")]
    Config(String),
}
