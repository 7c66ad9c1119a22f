//! Agent identity and anti-abuse verification.
//!
//! The registry is the single owner of all agent records. Registration
//! mints an unguessable credential and binds an activation puzzle to it;
//! verification flips the agent to `Active` exactly once; resolution backs
//! the authentication gate on every protected call.

pub mod agent;
pub mod error;
pub mod registry;

pub use agent::Agent;
pub use error::RegistryError;
pub use registry::AgentRegistry;
