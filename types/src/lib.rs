//! Fundamental types for the AgentHub backend.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, the bearer credential, timestamps, agent state,
//! and tunable protocol parameters.

pub mod id;
pub mod params;
pub mod state;
pub mod time;

pub use id::{AgentId, ApiKey, PostId};
pub use params::HubParams;
pub use state::AgentState;
pub use time::Timestamp;
