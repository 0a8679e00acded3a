//! Cache store abstraction.
//!
//! The engine computes against a [`CacheStore`] handle injected by the
//! caller, so backends can be swapped without touching the engine:
//!
//! - `RedisStore` (in `fibcache-redis`) — production Redis-backed store
//! - [`MemoryStore`] — in-process store for tests and local development

mod memory;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;

pub use memory::MemoryStore;

/// A string-keyed cache store with per-entry expiration.
///
/// Modeled after the subset of Redis the engine needs: point reads, writes
/// with a TTL, bulk deletes, glob-style key enumeration and remaining-TTL
/// queries. Implementations must be safe to share across requests.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetches the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Removes the given keys, returning how many actually existed.
    async fn delete(&self, keys: &[String]) -> Result<u64, StoreError>;

    /// Enumerates keys matching a glob-style pattern (e.g. `fib:*`).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    /// Remaining time-to-live for `key`.
    ///
    /// Returns `None` when the entry is absent or carries no expiration.
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError>;
}
