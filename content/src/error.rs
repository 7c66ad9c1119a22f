use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("post not found: {0}")]
    PostNotFound(String),
}
