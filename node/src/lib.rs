//! The hub node — wires the registry, content store, and vote ledger into
//! the compound operations the transport layer exposes.

pub mod config;
pub mod error;
pub mod hub;

pub use config::HubConfig;
pub use error::HubError;
pub use hub::{HeartbeatView, Hub, HubStats, Registration};
