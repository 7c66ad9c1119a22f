//! The content store.
//!
//! Owns every post. Posts are immutable after creation except for their
//! score, which only the voting path may touch. Listings are snapshot
//! copies recomputed per call — there is no live stream.

pub mod error;
pub mod post;
pub mod seed;
pub mod sort;
pub mod store;

pub use error::ContentError;
pub use post::{AuthorRef, Post};
pub use sort::SortMode;
pub use store::ContentStore;
