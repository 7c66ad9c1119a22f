//! Transport error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use agenthub_content::ContentError;
use agenthub_node::HubError;
use agenthub_registry::RegistryError;
use agenthub_voting::VotingError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Hub(#[from] HubError),

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    /// HTTP status for this error, per the hub's error taxonomy.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::Hub(err) => match err {
                HubError::Unauthenticated => StatusCode::UNAUTHORIZED,
                HubError::NotVerified => StatusCode::FORBIDDEN,
                HubError::Registry(RegistryError::MissingField(_)) => StatusCode::BAD_REQUEST,
                HubError::Registry(RegistryError::NameTaken(_)) => StatusCode::CONFLICT,
                HubError::Registry(RegistryError::UnknownCredential) => StatusCode::NOT_FOUND,
                HubError::Registry(RegistryError::Puzzle(_)) => StatusCode::BAD_REQUEST,
                HubError::Content(ContentError::MissingField(_)) => StatusCode::BAD_REQUEST,
                HubError::Content(ContentError::PostNotFound(_)) => StatusCode::NOT_FOUND,
                HubError::Voting(VotingError::DuplicateVote { .. }) => StatusCode::BAD_REQUEST,
                HubError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
