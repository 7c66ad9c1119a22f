use agenthub_puzzle::PuzzleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("agent name already taken")]
    NameTaken(String),

    #[error("agent not found")]
    UnknownCredential,

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
