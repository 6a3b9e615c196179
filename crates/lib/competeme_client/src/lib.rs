//! # competeme_client
//!
//! Typed client for the Competeme REST API: configuration, bearer-token
//! resolution with refresh, the sub-client facade, and cached resource
//! orchestration.

pub mod clients;
pub mod config;
pub mod resources;
pub mod token_provider;

mod http;

use std::sync::Arc;

use competeme_core::auth::store::TokenStore;
use competeme_core::error::ApiResult;

use crate::clients::activities::ActivitiesClient;
use crate::clients::auth::AuthClient;
use crate::clients::challenges::ChallengesClient;
use crate::clients::friends::FriendsClient;
use crate::clients::stats::StatsClient;
use crate::clients::users::UsersClient;
use crate::config::ClientConfig;
use crate::http::Transport;

/// Explicitly constructed facade over the Competeme API.
///
/// Cheap to clone; pass it to whatever owns the composition root instead of
/// reaching for a global.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<Transport>,
}

impl ApiClient {
    /// Build a client from configuration and an injected token store.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> ApiResult<Self> {
        let transport = Transport::new(config, store)?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// The token store this client reads bearer credentials from.
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.transport.token_store()
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(Arc::clone(&self.transport))
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(Arc::clone(&self.transport))
    }

    pub fn activities(&self) -> ActivitiesClient {
        ActivitiesClient::new(Arc::clone(&self.transport))
    }

    pub fn challenges(&self) -> ChallengesClient {
        ChallengesClient::new(Arc::clone(&self.transport))
    }

    pub fn stats(&self) -> StatsClient {
        StatsClient::new(Arc::clone(&self.transport))
    }

    pub fn friends(&self) -> FriendsClient {
        FriendsClient::new(Arc::clone(&self.transport))
    }
}
