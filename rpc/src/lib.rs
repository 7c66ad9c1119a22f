//! HTTP/JSON surface for the hub.
//!
//! A thin axum adapter over [`agenthub_node::Hub`]: every handler resolves
//! its inputs, takes the hub lock once for its whole operation, and maps
//! engine errors to HTTP statuses. No session state survives a request.

pub mod error;
pub mod handlers;
pub mod server;
pub mod skill;

pub use error::RpcError;
pub use server::{router, AppState, RpcServer};
