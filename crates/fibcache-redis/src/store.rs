//! Redis-backed cache store.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use fibcache_core::{CacheStore, StoreError};

use crate::config::RedisConfig;

/// [`CacheStore`] implementation over a shared Redis connection.
///
/// The [`ConnectionManager`] multiplexes all requests onto one connection
/// and is cheap to clone per operation. Failures are surfaced as
/// [`StoreError::Unavailable`] and never retried here; retry discipline
/// belongs to the caller, which by contract has none.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and verifies the connection with a `PING`.
    pub async fn connect(config: &RedisConfig) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(config.connection_url()).map_err(StoreError::unavailable)?;
        let manager = client
            .get_connection_manager()
            .await
            .map_err(StoreError::unavailable)?;

        let mut conn = manager.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::unavailable)?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            db = config.db,
            response = %pong,
            "connected to redis"
        );

        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await.map_err(StoreError::unavailable)?;
        Ok(value)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .set_ex(key, value, ttl.as_secs())
            .await
            .map_err(StoreError::unavailable)?;
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64, StoreError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.manager.clone();
        let removed: u64 = conn.del(keys).await.map_err(StoreError::unavailable)?;
        Ok(removed)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.manager.clone();
        let keys: Vec<String> = conn.keys(pattern).await.map_err(StoreError::unavailable)?;
        Ok(keys)
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        let mut conn = self.manager.clone();
        // TTL sentinels: -2 missing key, -1 no expiration set.
        let seconds: i64 = conn.ttl(key).await.map_err(StoreError::unavailable)?;
        if seconds >= 0 {
            Ok(Some(Duration::from_secs(seconds as u64)))
        } else {
            Ok(None)
        }
    }
}
