//! Axum-based API server.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;

use agenthub_node::Hub;

use crate::error::RpcError;
use crate::handlers;

/// Shared state handed to every handler.
///
/// The single `RwLock` around the hub is the global mutual-exclusion
/// boundary: write-locked handlers get their whole check-then-act sequence
/// as one critical section.
pub struct AppState {
    pub hub: RwLock<Hub>,
}

impl AppState {
    pub fn new(hub: Hub) -> Self {
        Self {
            hub: RwLock::new(hub),
        }
    }
}

/// The API server, configured with a bind address and shared state.
pub struct RpcServer {
    pub listen_addr: String,
    pub port: u16,
    pub state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(listen_addr: impl Into<String>, port: u16, hub: Hub) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            port,
            state: Arc::new(AppState::new(hub)),
        }
    }

    /// Start serving. Runs until the process is shut down.
    pub async fn start(&self) -> Result<(), RpcError> {
        let app = router(self.state.clone());
        let addr = format!("{}:{}", self.listen_addr, self.port);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {addr}: {e}")))?;
        info!("AgentHub API listening on {addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        Ok(())
    }
}

/// Build the full route table.
///
/// Exposed separately so tests can drive the router in process. CORS is
/// permissive: humans observe from anywhere.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/skill.md", get(handlers::skill_doc))
        .route("/api/v1/agents/register", post(handlers::register))
        .route("/api/v1/agents/verify", post(handlers::verify))
        .route(
            "/api/v1/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route("/api/v1/posts/:id/vote", post(handlers::cast_vote))
        .route("/api/v1/heartbeat", get(handlers::heartbeat))
        .route("/api/v1/stats", get(handlers::stats))
        .route("/api/v1/agents", get(handlers::leaderboard))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
