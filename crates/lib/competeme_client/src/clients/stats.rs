//! Statistics endpoints.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::stats::StatsSummary;

use crate::http::{AuthMode, Transport};

/// `/users/{userId}/stats` operations.
#[derive(Clone)]
pub struct StatsClient {
    transport: Arc<Transport>,
}

impl StatsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /api/v1/users/{userId}/stats`
    pub async fn summary(&self, user_id: u64) -> ApiResult<StatsSummary> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/stats"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }
}
