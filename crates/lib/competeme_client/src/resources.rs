//! Cached reads and invalidating mutations over the facade.
//!
//! Each mutation names the exact set of cached reads it invalidates at the
//! call site — the mapping is data, not convention. Session operations own
//! the credential pair.

use std::sync::Arc;

use futures::FutureExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use competeme_core::auth::AuthError;
use competeme_core::auth::claims::decode_claims;
use competeme_core::auth::store::TokenKind;
use competeme_core::cache::{Fetcher, QueryCache, QueryKey};
use competeme_core::error::{ApiError, ApiResult};
use competeme_core::models::activity::{ActivityEntry, NewActivity};
use competeme_core::models::auth::{AuthRequest, RegisterRequest, TokenPair};
use competeme_core::models::challenge::{Challenge, NewChallenge, ProgressUpdate};
use competeme_core::models::friend::{FriendRequest, SendFriendRequest};
use competeme_core::models::stats::StatsSummary;
use competeme_core::models::user::{ImageUpdate, UserProfile, UserSummary};

use crate::ApiClient;

/// Outcome of a cached read.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    data: Option<T>,
    error: Option<ApiError>,
}

impl<T> ResourceState<T> {
    fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    fn failed(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// True when the backend answered 403 — render access denied, not a
    /// generic failure.
    pub fn is_forbidden(&self) -> bool {
        matches!(self.error, Some(ApiError::Forbidden))
    }
}

/// Query/mutation orchestration: cached reads, invalidating writes, and the
/// session operations that own the credential pair.
#[derive(Clone)]
pub struct Resources {
    client: ApiClient,
    cache: Arc<QueryCache>,
}

impl Resources {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: Arc::new(QueryCache::new()),
        }
    }

    /// The underlying cache (state inspection, manual invalidation).
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub async fn profile(&self, user_id: u64) -> ResourceState<UserProfile> {
        self.read(QueryKey::Profile(user_id)).await
    }

    pub async fn stats(&self, user_id: u64) -> ResourceState<StatsSummary> {
        self.read(QueryKey::Stats(user_id)).await
    }

    pub async fn activities(&self, user_id: u64) -> ResourceState<Vec<ActivityEntry>> {
        self.read(QueryKey::Activities(user_id)).await
    }

    pub async fn challenges(&self, user_id: u64) -> ResourceState<Vec<Challenge>> {
        self.read(QueryKey::Challenges(user_id)).await
    }

    pub async fn friends(&self, user_id: u64) -> ResourceState<Vec<UserSummary>> {
        self.read(QueryKey::Friends(user_id)).await
    }

    pub async fn friend_requests(&self, user_id: u64) -> ResourceState<Vec<FriendRequest>> {
        self.read(QueryKey::FriendRequests(user_id)).await
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Log an activity. Invalidates: activity log, stats.
    pub async fn add_activity(
        &self,
        user_id: u64,
        activity: &NewActivity,
    ) -> ApiResult<ActivityEntry> {
        let created = self.client.activities().add(user_id, activity).await?;
        self.cache
            .invalidate_all(&[QueryKey::Activities(user_id), QueryKey::Stats(user_id)])
            .await;
        Ok(created)
    }

    /// Create a challenge. Invalidates: challenge list.
    pub async fn add_challenge(
        &self,
        user_id: u64,
        challenge: &NewChallenge,
    ) -> ApiResult<Challenge> {
        let created = self.client.challenges().create(user_id, challenge).await?;
        self.cache
            .invalidate_all(&[QueryKey::Challenges(user_id)])
            .await;
        Ok(created)
    }

    /// Record challenge progress. Invalidates: challenge list, stats.
    pub async fn record_progress(
        &self,
        user_id: u64,
        challenge_id: u64,
        update: &ProgressUpdate,
    ) -> ApiResult<Challenge> {
        let updated = self
            .client
            .challenges()
            .add_progress(user_id, challenge_id, update)
            .await?;
        self.cache
            .invalidate_all(&[QueryKey::Challenges(user_id), QueryKey::Stats(user_id)])
            .await;
        Ok(updated)
    }

    /// Replace the profile image. Invalidates: profile.
    pub async fn update_profile_image(
        &self,
        user_id: u64,
        image: &ImageUpdate,
    ) -> ApiResult<UserProfile> {
        let updated = self.client.users().update_image(user_id, image).await?;
        self.cache
            .invalidate_all(&[QueryKey::Profile(user_id)])
            .await;
        Ok(updated)
    }

    /// Send a friend request. Invalidates: the sender's request list.
    pub async fn send_friend_request(
        &self,
        user_id: u64,
        request: &SendFriendRequest,
    ) -> ApiResult<FriendRequest> {
        let sent = self.client.friends().send_request(user_id, request).await?;
        self.cache
            .invalidate_all(&[QueryKey::FriendRequests(user_id)])
            .await;
        Ok(sent)
    }

    /// Accept a friend request. Invalidates: request list, friends list.
    pub async fn accept_friend_request(&self, user_id: u64, request_id: u64) -> ApiResult<()> {
        self.client.friends().accept(user_id, request_id).await?;
        self.cache
            .invalidate_all(&[QueryKey::FriendRequests(user_id), QueryKey::Friends(user_id)])
            .await;
        Ok(())
    }

    /// Decline a friend request. Invalidates: request list.
    pub async fn decline_friend_request(&self, user_id: u64, request_id: u64) -> ApiResult<()> {
        self.client.friends().decline(user_id, request_id).await?;
        self.cache
            .invalidate_all(&[QueryKey::FriendRequests(user_id)])
            .await;
        Ok(())
    }

    /// Remove a friend. Invalidates: friends list.
    pub async fn remove_friend(&self, user_id: u64, friend_id: u64) -> ApiResult<()> {
        self.client.friends().remove(user_id, friend_id).await?;
        self.cache
            .invalidate_all(&[QueryKey::Friends(user_id)])
            .await;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Sign in and persist the credential pair wholesale. Returns the
    /// signed-in user id.
    ///
    /// The backend answers 404 for unknown credentials; surfaced as a
    /// validation error with a displayable message.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<u64> {
        let request = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let pair = self
            .client
            .auth()
            .authenticate(&request)
            .await
            .map_err(invalid_credentials)?;
        self.persist_pair(&pair)?;
        subject_id(&pair.access_token)
    }

    /// Create an account and persist the credential pair wholesale. Returns
    /// the new user id. Maps 404 like [`Resources::login`].
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<u64> {
        let pair = self
            .client
            .auth()
            .register(request)
            .await
            .map_err(invalid_credentials)?;
        self.persist_pair(&pair)?;
        subject_id(&pair.access_token)
    }

    /// Sign out: delete both credential slots together and drop the cache.
    pub fn logout(&self) -> ApiResult<()> {
        self.client
            .token_store()
            .clear_all()
            .map_err(store_error)?;
        self.cache.clear();
        Ok(())
    }

    /// Signed-in user id from the stored access token, if any.
    pub fn current_user_id(&self) -> Option<u64> {
        let token = self.client.token_store().get(TokenKind::Access)?;
        decode_claims(&token).ok()?.sub.parse().ok()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    async fn read<T: DeserializeOwned>(&self, key: QueryKey) -> ResourceState<T> {
        match self.cache.fetch_with(key, self.fetcher_for(key)).await {
            Ok(value) => match serde_json::from_value(value) {
                Ok(data) => ResourceState::ready(data),
                Err(e) => {
                    ResourceState::failed(ApiError::Transport(format!("cached value decode: {e}")))
                }
            },
            Err(error) => ResourceState::failed(error),
        }
    }

    /// One fetcher per key; invalidation re-runs the same one.
    fn fetcher_for(&self, key: QueryKey) -> Fetcher {
        let client = self.client.clone();
        Arc::new(move || {
            let client = client.clone();
            async move {
                match key {
                    QueryKey::Profile(id) => to_value(client.users().profile(id).await?),
                    QueryKey::Stats(id) => to_value(client.stats().summary(id).await?),
                    QueryKey::Activities(id) => to_value(client.activities().list(id).await?),
                    QueryKey::Challenges(id) => to_value(client.challenges().list(id).await?),
                    QueryKey::Friends(id) => to_value(client.friends().list(id).await?),
                    QueryKey::FriendRequests(id) => to_value(client.friends().requests(id).await?),
                }
            }
            .boxed()
        })
    }

    fn persist_pair(&self, pair: &TokenPair) -> ApiResult<()> {
        let store = self.client.token_store();
        store
            .set(TokenKind::Access, &pair.access_token)
            .map_err(store_error)?;
        store
            .set(TokenKind::Refresh, &pair.refresh_token)
            .map_err(store_error)?;
        Ok(())
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Transport(format!("cache encode: {e}")))
}

fn subject_id(access_token: &str) -> ApiResult<u64> {
    let claims = decode_claims(access_token)
        .map_err(|e| ApiError::Transport(format!("access token decode: {e}")))?;
    claims
        .sub
        .parse()
        .map_err(|_| ApiError::Transport(format!("non-numeric subject: {}", claims.sub)))
}

fn invalid_credentials(error: ApiError) -> ApiError {
    match error {
        ApiError::NotFound(_) => ApiError::Validation("Invalid credentials".into()),
        other => other,
    }
}

fn store_error(error: AuthError) -> ApiError {
    ApiError::Transport(format!("credential store: {error}"))
}
