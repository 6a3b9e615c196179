//! Client configuration.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL (trailing slash optional).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                     | Default                 |
    /// |------------------------------|-------------------------|
    /// | `COMPETEME_API_URL`          | `http://localhost:8080` |
    /// | `COMPETEME_API_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COMPETEME_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_secs = std::env::var("COMPETEME_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Configuration pointed at an explicit base URL (tests, embedding).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
