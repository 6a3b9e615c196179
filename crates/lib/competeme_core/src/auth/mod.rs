//! Credential handling and authorization predicates.
//!
//! Token storage, claim decoding, and the presentation-layer access checks
//! shared by the client facade and the resource orchestration.

pub mod access;
pub mod claims;
pub mod store;

use thiserror::Error;

/// Credential-layer errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}
