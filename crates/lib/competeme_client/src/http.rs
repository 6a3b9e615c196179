//! HTTP plumbing shared by the sub-clients.
//!
//! One reqwest client, one attempt per logical call, and one place where
//! statuses become `ApiError` variants. Retry policy belongs to callers,
//! and the callers decline it.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use competeme_core::auth::store::TokenStore;
use competeme_core::error::{ApiError, ApiResult, ErrorBody};

use crate::config::ClientConfig;
use crate::token_provider::AccessTokenProvider;

/// Whether a request carries the bearer token.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AuthMode {
    Bearer,
    Public,
}

pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
    tokens: AccessTokenProvider,
}

impl Transport {
    pub(crate) fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> ApiResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| ApiError::Validation(format!("invalid base URL: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("client build: {e}")))?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let tokens = AccessTokenProvider::new(http.clone(), base_url.clone(), store);
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub(crate) fn token_store(&self) -> Arc<dyn TokenStore> {
        self.tokens.token_store()
    }

    /// Serialize a request body, surfacing encode failures as transport errors.
    pub(crate) fn body<B: Serialize>(body: &B) -> ApiResult<Value> {
        serde_json::to_value(body).map_err(|e| ApiError::Transport(format!("request encode: {e}")))
    }

    /// Issue a request and decode the JSON response.
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        query: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> ApiResult<T> {
        let resp = self.execute(method, path, auth, query, body).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("response decode: {e}")))
    }

    /// Issue a request and discard the response body.
    pub(crate) async fn unit(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        body: Option<Value>,
    ) -> ApiResult<()> {
        self.execute(method, path, auth, None, body).await.map(drop)
    }

    /// Single attempt: build, authenticate, send, classify.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        auth: AuthMode,
        query: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> ApiResult<reqwest::Response> {
        let mut req = self
            .http
            .request(method.clone(), format!("{}{}", self.base_url, path));
        if let Some(query) = query {
            req = req.query(query);
        }
        if let AuthMode::Bearer = auth {
            let token = self.tokens.resolve_access_token().await;
            if !token.is_empty() {
                req = req.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        debug!(%method, path, "request");
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
        Err(ApiError::from_status(status.as_u16(), message))
    }
}
