//! Activity log endpoints.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::activity::{ActivityEntry, NewActivity};

use crate::http::{AuthMode, Transport};

/// `/users/{userId}/activities` operations.
#[derive(Clone)]
pub struct ActivitiesClient {
    transport: Arc<Transport>,
}

impl ActivitiesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /api/v1/users/{userId}/activities/`
    pub async fn list(&self, user_id: u64) -> ApiResult<Vec<ActivityEntry>> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/activities/"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/activities/`
    pub async fn add(&self, user_id: u64, activity: &NewActivity) -> ApiResult<ActivityEntry> {
        self.transport
            .json(
                Method::POST,
                &format!("/api/v1/users/{user_id}/activities/"),
                AuthMode::Bearer,
                None,
                Some(Transport::body(activity)?),
            )
            .await
    }
}
