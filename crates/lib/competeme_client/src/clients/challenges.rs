//! Challenge endpoints.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::challenge::{Challenge, NewChallenge, ProgressUpdate};

use crate::http::{AuthMode, Transport};

/// `/users/{userId}/challenges` operations.
#[derive(Clone)]
pub struct ChallengesClient {
    transport: Arc<Transport>,
}

impl ChallengesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /api/v1/users/{userId}/challenges/`
    pub async fn list(&self, user_id: u64) -> ApiResult<Vec<Challenge>> {
        self.transport
            .json(
                Method::GET,
                &format!("/api/v1/users/{user_id}/challenges/"),
                AuthMode::Bearer,
                None,
                None,
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/challenges/`
    pub async fn create(&self, user_id: u64, challenge: &NewChallenge) -> ApiResult<Challenge> {
        self.transport
            .json(
                Method::POST,
                &format!("/api/v1/users/{user_id}/challenges/"),
                AuthMode::Bearer,
                None,
                Some(Transport::body(challenge)?),
            )
            .await
    }

    /// `POST /api/v1/users/{userId}/challenges/{challengeId}/progress` —
    /// returns the challenge with updated progress.
    pub async fn add_progress(
        &self,
        user_id: u64,
        challenge_id: u64,
        update: &ProgressUpdate,
    ) -> ApiResult<Challenge> {
        self.transport
            .json(
                Method::POST,
                &format!("/api/v1/users/{user_id}/challenges/{challenge_id}/progress"),
                AuthMode::Bearer,
                None,
                Some(Transport::body(update)?),
            )
            .await
    }
}
