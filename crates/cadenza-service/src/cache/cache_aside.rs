//! The cache-aside accessor.
//!
//! Wraps a store read with the check-cache → on-miss-load → populate
//! sequence. The cache is strictly best-effort on both sides: a backend
//! error or an undecodable entry counts as a miss, and a failed write-back
//! is logged and dropped. The store remains the source of truth; updates
//! do not refresh existing entries, so a read may observe a stale value
//! until its TTL elapses. Deletes drop the detail entry for the removed
//! record via [`CacheAside::invalidate`].

use super::CacheStore;
use cadenza_core::CatalogResult;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Expiration applied to every cache entry.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Read accessor preferring the cache and falling back to the store.
#[derive(Clone)]
pub struct CacheAside {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl CacheAside {
    /// Creates an accessor with the standard one-hour TTL.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            ttl: CACHE_TTL,
        }
    }

    /// Creates an accessor with a custom TTL.
    #[must_use]
    pub fn with_ttl(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Serves a read through the cache.
    ///
    /// `load` queries the store and is only invoked on a cache miss. A
    /// `None` from the loader (record not found) is returned as-is and
    /// writes nothing to the cache; a `Some` is cached under `key` with
    /// the accessor's TTL before being returned.
    ///
    /// Only loader errors propagate. Cache failures degrade the read to a
    /// plain store query.
    pub async fn get_or_load<T, F, Fut>(&self, key: &str, load: F) -> CatalogResult<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = CatalogResult<Option<T>>>,
    {
        if let Some(json) = self.lookup(key).await {
            match serde_json::from_str::<T>(&json) {
                Ok(value) => {
                    debug!(key, "cache hit");
                    return Ok(Some(value));
                }
                Err(err) => {
                    warn!(key, error = %err, "discarding undecodable cache entry");
                }
            }
        }

        debug!(key, "cache miss");
        let Some(value) = load().await? else {
            return Ok(None);
        };

        self.write_back(key, &value).await;
        Ok(Some(value))
    }

    /// Best-effort removal of a cache entry.
    ///
    /// Used after deletes so a removed record cannot be served from cache.
    /// Updates deliberately do not call this; their entries age out with
    /// the TTL instead.
    pub async fn invalidate(&self, key: &str) {
        if let Err(err) = self.store.delete(key).await {
            warn!(key, error = %err, "cache invalidation failed");
        }
    }

    /// Best-effort cache lookup: backend errors count as a miss.
    async fn lookup(&self, key: &str) -> Option<String> {
        match self.store.get_raw(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "cache lookup failed, falling back to the store");
                None
            }
        }
    }

    /// Best-effort write-back: serialization or backend errors are logged
    /// and dropped.
    async fn write_back<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize value for caching");
                return;
            }
        };

        if let Err(err) = self.store.set_raw(key, &json, self.ttl).await {
            warn!(key, error = %err, "cache write-back failed");
        }
    }
}

impl std::fmt::Debug for CacheAside {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAside").field("ttl", &self.ttl).finish()
    }
}
