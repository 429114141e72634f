//! Client error types.

use thiserror::Error;

/// Errors returned by [`QuizClient`](crate::QuizClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the request body or path (HTTP 400).
    #[error("rejected by server: {0}")]
    BadRequest(String),

    /// The targeted question does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status, typically a store failure.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The server could not be reached or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// A success reply whose body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Store failures and network errors may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
