//! Transport-level error taxonomy.
//!
//! Every error is classified exactly once, where the HTTP response is read;
//! the layers above match on variants and never re-inspect status codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience alias for client call results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by API calls, tagged at the transport boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP 401 — no usable credential. Global handling clears the pair and
    /// re-authenticates.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// HTTP 403 — the signed-in identity may not act on the target resource.
    #[error("Access denied")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure, timeout, undecodable body, or an unclassified status.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Error body shape returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Classify a non-success HTTP status plus the backend's message, if one
    /// could be parsed from the response body.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthenticated,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(message.unwrap_or_else(|| "resource not found".into())),
            400 => ApiError::Validation(message.unwrap_or_else(|| "invalid request".into())),
            s => ApiError::Transport(format!("HTTP {s}: {}", message.unwrap_or_default())),
        }
    }

    /// True for the 403 variant (drives access-denied rendering).
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}
