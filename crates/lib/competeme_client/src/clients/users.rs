//! User endpoints.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::user::{ImageUpdate, UserProfile, UserSummary};

use crate::http::{AuthMode, Transport};

/// `/users` operations.
#[derive(Clone)]
pub struct UsersClient {
    transport: Arc<Transport>,
}

impl UsersClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /api/v1/users/{userId}/profile`
    pub async fn profile(&self, user_id: u64) -> ApiResult<UserProfile> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/profile"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }

    /// `GET /api/v1/users/search?query=`
    pub async fn search(&self, query: &str) -> ApiResult<Vec<UserSummary>> {
        self.transport
            .json(
                Method::GET,
                "/api/v1/users/search",
                AuthMode::Bearer,
                Some(&[("query", query.to_string())]),
                None,
            )
            .await
    }

    /// `PUT /api/v1/users/{id}/image` — returns the updated profile.
    pub async fn update_image(&self, user_id: u64, image: &ImageUpdate) -> ApiResult<UserProfile> {
        self.transport
            .json(
                Method::PUT,
                &format!("/api/v1/users/{user_id}/image"),
                AuthMode::Bearer,
                None,
                Some(Transport::body(image)?),
            )
            .await
    }
}
