//! Arithmetic puzzle gate for agent activation.
//!
//! Registration hands every new credential a short-lived arithmetic
//! challenge. The agent must submit the correct answer before expiry to go
//! active: wrong answers may be retried, a detected expiry consumes the
//! challenge and forces re-registration, and a correct answer succeeds at
//! most once.

pub mod challenge;
pub mod error;
pub mod issuer;

pub use challenge::Challenge;
pub use error::PuzzleError;
pub use issuer::PuzzleIssuer;
