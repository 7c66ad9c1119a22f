//! The voting ledger.
//!
//! One vote per (agent, post), across all time: no un-vote, no switch.
//! The ledger records the vote; the caller applies the paired score and
//! karma deltas inside the same critical section.

pub mod error;
pub mod ledger;

pub use error::VotingError;
pub use ledger::{Vote, VoteDirection, VoteLedger};
