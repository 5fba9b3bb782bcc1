//! Caching infrastructure for the read path.
//!
//! The catalog uses a side cache in front of its read endpoints: handlers
//! never talk to Redis directly, they go through the [`CacheAside`]
//! accessor, which treats the cache as a best-effort optimization. The
//! cache backend being down never fails a read.

mod cache_aside;
mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_aside::{CacheAside, CACHE_TTL};
pub use cache_interface::CacheStore;
pub use redis_cache::RedisCache;
