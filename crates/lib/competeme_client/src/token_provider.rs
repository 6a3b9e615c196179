//! Bearer-token resolution with refresh.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use competeme_core::auth::claims::{DEFAULT_EXPIRY_THRESHOLD_SECS, is_about_to_expire};
use competeme_core::auth::store::{TokenKind, TokenStore};
use competeme_core::error::{ApiError, ApiResult};
use competeme_core::models::auth::{RefreshRequest, TokenPair};

/// Produces a valid bearer token for outgoing requests.
///
/// An empty string means "send the request unauthenticated": refresh failures
/// degrade rather than failing the call, and the backend's uniform rejection
/// is handled by the caller's error policy.
pub struct AccessTokenProvider {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    threshold_secs: i64,
    /// Single-flight gate: concurrent expiring callers share one refresh.
    refresh_gate: Mutex<()>,
}

impl AccessTokenProvider {
    pub fn new(http: reqwest::Client, base_url: String, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http,
            base_url,
            store,
            threshold_secs: DEFAULT_EXPIRY_THRESHOLD_SECS,
            refresh_gate: Mutex::new(()),
        }
    }

    pub(crate) fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// Resolve a bearer token, refreshing through the backend when the stored
    /// access token is about to expire. At most one network round trip.
    pub async fn resolve_access_token(&self) -> String {
        let Some(access) = self.store.get(TokenKind::Access) else {
            return String::new();
        };
        if !self.about_to_expire(&access) {
            return access;
        }

        let _guard = self.refresh_gate.lock().await;
        // A concurrent caller may have refreshed while we waited on the gate.
        if let Some(access) = self.store.get(TokenKind::Access)
            && !self.about_to_expire(&access)
        {
            return access;
        }

        let Some(refresh_token) = self.store.get(TokenKind::Refresh) else {
            return String::new();
        };
        match self.request_refresh(&refresh_token).await {
            Ok(pair) => {
                self.persist(&pair);
                pair.access_token
            }
            Err(error) => {
                warn!(%error, "token refresh failed, proceeding unauthenticated");
                String::new()
            }
        }
    }

    /// An undecodable stored token is treated as expiring so the refresh path
    /// can replace it.
    fn about_to_expire(&self, token: &str) -> bool {
        match is_about_to_expire(token, self.threshold_secs) {
            Ok(expiring) => expiring,
            Err(error) => {
                debug!(%error, "stored access token undecodable");
                true
            }
        }
    }

    /// `POST /api/v1/auth/refresh-token` with the stored refresh token, verbatim.
    async fn request_refresh(&self, refresh_token: &str) -> ApiResult<TokenPair> {
        let resp = self
            .http
            .post(format!("{}/api/v1/auth/refresh-token", self.base_url))
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("refresh request: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Transport(format!("refresh HTTP {status}: {body}")));
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|e| ApiError::Transport(format!("refresh response parse: {e}")))
    }

    fn persist(&self, pair: &TokenPair) {
        // Two independent writes; the slots are not atomic as a pair.
        if let Err(error) = self.store.set(TokenKind::Access, &pair.access_token) {
            warn!(%error, "persisting refreshed access token failed");
        }
        if let Err(error) = self.store.set(TokenKind::Refresh, &pair.refresh_token) {
            warn!(%error, "persisting rotated refresh token failed");
        }
    }
}
