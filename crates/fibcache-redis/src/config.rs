//! Redis connection settings.

use serde::Deserialize;

/// Connection coordinates for the Redis cache store.
///
/// Deserializable so the server can source it straight from the
/// environment (`REDIS_HOST`, `REDIS_PORT`, `REDIS_DB`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    /// Database index selected after connecting.
    pub db: i64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
        }
    }
}

impl RedisConfig {
    /// Connection URL in the form `redis://host:port/db`.
    pub fn connection_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}
