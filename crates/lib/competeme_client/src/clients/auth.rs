//! Authentication endpoints.
//!
//! The refresh endpoint is owned by the access token provider, not exposed
//! here.

use std::sync::Arc;

use reqwest::Method;

use competeme_core::error::ApiResult;
use competeme_core::models::auth::{AuthRequest, EmailResponse, RegisterRequest, TokenPair};

use crate::http::{AuthMode, Transport};

/// `/auth` operations.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<Transport>,
}

impl AuthClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `POST /api/v1/auth/authenticate` — sign in with email and password.
    pub async fn authenticate(&self, request: &AuthRequest) -> ApiResult<TokenPair> {
        self.transport
            .json(
                Method::POST,
                "/api/v1/auth/authenticate",
                AuthMode::Public,
                None,
                Some(Transport::body(request)?),
            )
            .await
    }

    /// `POST /api/v1/auth/register` — create an account.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<TokenPair> {
        self.transport
            .json(
                Method::POST,
                "/api/v1/auth/register",
                AuthMode::Public,
                None,
                Some(Transport::body(request)?),
            )
            .await
    }

    /// `GET /api/v1/auth/email` — the signed-in account's email.
    pub async fn current_email(&self) -> ApiResult<EmailResponse> {
        self.transport
            .json(Method::GET, "/api/v1/auth/email", AuthMode::Bearer, None, None)
            .await
    }
}
