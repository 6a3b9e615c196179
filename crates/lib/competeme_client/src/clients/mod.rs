//! Typed sub-clients over the HTTP transport.
//!
//! One module per resource area; each operation is a thin typed wrapper over
//! a single HTTP call.

pub mod activities;
pub mod auth;
pub mod challenges;
pub mod friends;
pub mod stats;
pub mod users;
