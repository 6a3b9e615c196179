//! # competeme_core
//!
//! Core domain logic for the Competeme client access layer: credential
//! storage, token claims, authorization predicates, and the query cache.

pub mod auth;
pub mod cache;
pub mod error;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
