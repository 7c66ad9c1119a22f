use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("no puzzle found — re-register")]
    NotFound,

    #[error("puzzle expired — re-register")]
    Expired,

    #[error("wrong answer — try again")]
    WrongAnswer,
}
