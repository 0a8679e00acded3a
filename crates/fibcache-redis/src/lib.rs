//! # Fibcache Redis Backend
//!
//! Redis implementation of the [`CacheStore`](fibcache_core::CacheStore)
//! trait, backed by a multiplexed [`ConnectionManager`] that reconnects
//! transparently. Connecting issues a `PING` so an unreachable store fails
//! the process at startup rather than on the first request.
//!
//! ## Example
//!
//! ```ignore
//! use fibcache_redis::{RedisConfig, RedisStore};
//!
//! let config = RedisConfig::default(); // localhost:6379, db 0
//! let store = RedisStore::connect(&config).await?;
//! ```

pub mod config;
pub mod store;

// Re-exports
pub use config::RedisConfig;
pub use store::RedisStore;
