//! Cache store trait for abstracted caching operations.

use async_trait::async_trait;
use cadenza_core::CatalogResult;
use std::time::Duration;

/// Raw key-value cache with per-key expiration.
///
/// Values are JSON strings; typed serialization lives in the accessor so
/// that implementations stay dyn-compatible. Implementations report backend
/// failures as errors; the accessor decides that those are non-fatal.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Gets a raw JSON value from the cache.
    ///
    /// Returns `None` if the key does not exist or has expired.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Sets a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()>;

    /// Deletes a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> CatalogResult<bool>;
}
