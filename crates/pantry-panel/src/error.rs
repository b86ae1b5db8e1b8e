//! Error types for the panel crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur in the panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Failed to start the server.
    #[error("failed to start panel: {0}")]
    StartupFailed(String),

    /// The request named a resource the panel does not manage.
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        let status = match &self {
            PanelError::UnknownResource(_) => StatusCode::NOT_FOUND,
            PanelError::StartupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
