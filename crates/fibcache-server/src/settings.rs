//! Environment-sourced server settings.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use fibcache_redis::RedisConfig;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Server settings, sourced from the environment.
///
/// `HOST` / `PORT` control the listen address; `REDIS_HOST`, `REDIS_PORT`
/// and `REDIS_DB` select the cache store. Everything has a default suitable
/// for local development against a stock Redis.
#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub redis: RedisConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default().separator("_").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Listen address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
