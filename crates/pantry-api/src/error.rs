//! Error taxonomy for backend requests.
//!
//! These variants exist for diagnostics only; before a failure reaches a
//! caller it is flattened into the one-message failure envelope.

use thiserror::Error;

/// What went wrong while talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}
