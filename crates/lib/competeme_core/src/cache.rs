//! Query cache with explicit invalidation.
//!
//! Entries are keyed by (resource kind, user id). Each entry remembers the
//! fetcher that produced it so invalidation can refetch in place. Concurrent
//! fetches of one key are coalesced behind a per-key lock.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Cache key: resource kind plus the discriminating user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Profile(u64),
    Stats(u64),
    Activities(u64),
    Challenges(u64),
    Friends(u64),
    FriendRequests(u64),
}

/// Lifecycle of a cached query. Re-entered through `Loading` on invalidation.
#[derive(Debug, Clone)]
pub enum QueryState {
    Loading,
    Ready(Value),
    Failed(ApiError),
}

/// Async producer stored with each entry, re-run on invalidation.
pub type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, Result<Value, ApiError>> + Send + Sync>;

struct QueryEntry {
    state: QueryState,
    fetcher: Fetcher,
}

/// Shared cache of last-fetched responses.
pub struct QueryCache {
    entries: DashMap<QueryKey, QueryEntry>,
    locks: DashMap<QueryKey, Arc<Mutex<()>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    fn key_lock(&self, key: QueryKey) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.entry(key).or_default().value())
    }

    /// Return the cached value for `key`, fetching with `fetcher` when the
    /// entry is absent or previously failed. Concurrent callers for the same
    /// key share one fetch.
    pub async fn fetch_with(&self, key: QueryKey, fetcher: Fetcher) -> Result<Value, ApiError> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        if let Some(entry) = self.entries.get(&key)
            && let QueryState::Ready(value) = &entry.state
        {
            return Ok(value.clone());
        }

        self.entries.insert(
            key,
            QueryEntry {
                state: QueryState::Loading,
                fetcher: Arc::clone(&fetcher),
            },
        );
        let result = fetcher().await;
        self.store_outcome(key, fetcher, &result);
        result
    }

    /// Refetch `key` in place when it is cached; a miss is a no-op. A failed
    /// refetch is recorded as `Failed`, not propagated.
    pub async fn invalidate(&self, key: QueryKey) {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        let Some(fetcher) = self
            .entries
            .get(&key)
            .map(|entry| Arc::clone(&entry.fetcher))
        else {
            debug!(?key, "invalidate miss");
            return;
        };

        self.entries.insert(
            key,
            QueryEntry {
                state: QueryState::Loading,
                fetcher: Arc::clone(&fetcher),
            },
        );
        let result = fetcher().await;
        if let Err(error) = &result {
            warn!(?key, %error, "refetch after invalidation failed");
        }
        self.store_outcome(key, fetcher, &result);
    }

    /// Invalidate every key a mutation names.
    pub async fn invalidate_all(&self, keys: &[QueryKey]) {
        for key in keys {
            self.invalidate(*key).await;
        }
    }

    /// Current state of a key, if cached.
    pub fn state(&self, key: QueryKey) -> Option<QueryState> {
        self.entries.get(&key).map(|entry| entry.state.clone())
    }

    /// Drop every entry (sign-out path).
    pub fn clear(&self) {
        self.entries.clear();
    }

    fn store_outcome(&self, key: QueryKey, fetcher: Fetcher, result: &Result<Value, ApiError>) {
        let state = match result {
            Ok(value) => QueryState::Ready(value.clone()),
            Err(error) => QueryState::Failed(error.clone()),
        };
        self.entries.insert(key, QueryEntry { state, fetcher });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
