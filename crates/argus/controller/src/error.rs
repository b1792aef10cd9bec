//! Controller client error types

use thiserror::Error;

/// Errors surfaced by the controller client.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Token exchange failed; nothing downstream is meaningful.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport-level failure after all retry attempts were exhausted.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success response the caller did not expect.
    #[error("controller API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response
        message: String,
    },

    /// A lookup returned no match (application, tier, resource id).
    #[error("not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded as the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Malformed endpoint or base URL.
    #[error("invalid URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for ControllerError {
    fn from(err: reqwest::Error) -> Self {
        ControllerError::Transport(err.to_string())
    }
}

/// Result type for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;
