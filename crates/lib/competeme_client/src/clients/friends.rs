//! Friendship endpoints.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::friend::{FriendRequest, SendFriendRequest};
use competeme_core::models::user::UserSummary;

use crate::http::{AuthMode, Transport};

/// `/users/{userId}/friends` operations.
#[derive(Clone)]
pub struct FriendsClient {
    transport: Arc<Transport>,
}

impl FriendsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /api/v1/users/{userId}/friends/`
    pub async fn list(&self, user_id: u64) -> ApiResult<Vec<UserSummary>> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/friends/"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }

    /// `DELETE /api/v1/users/{userId}/friends/{friendId}`
    pub async fn remove(&self, user_id: u64, friend_id: u64) -> ApiResult<()> {
        self.transport
            .unit(
                Method::DELETE,
                &format!("/api/v1/users/{user_id}/friends/{friend_id}"),
                AuthMode::Bearer,
                None,
            )
            .await
    }

    /// `GET /api/v1/users/{userId}/friends/requests`
    pub async fn requests(&self, user_id: u64) -> ApiResult<Vec<FriendRequest>> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/friends/requests"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/friends/requests`
    pub async fn send_request(
        &self,
        user_id: u64,
        request: &SendFriendRequest,
    ) -> ApiResult<FriendRequest> {
        self.transport
            .json(
                Method::POST,
                &format!("/api/v1/users/{user_id}/friends/requests"),
                AuthMode::Bearer,
                None,
                Some(Transport::body(request)?),
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/friends/requests/{requestId}/accept`
    pub async fn accept(&self, user_id: u64, request_id: u64) -> ApiResult<()> {
        self.transport
            .unit(
                Method::POST,
                &format!("/api/v1/users/{user_id}/friends/requests/{request_id}/accept"),
                AuthMode::Bearer,
                None,
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/friends/requests/{requestId}/decline`
    pub async fn decline(&self, user_id: u64, request_id: u64) -> ApiResult<()> {
        self.transport
            .unit(
                Method::POST,
                &format!("/api/v1/users/{user_id}/friends/requests/{request_id}/decline"),
                AuthMode::Bearer,
                None,
            )
            .await
    }
}
