//! # Fibcache Core
//!
//! Domain crate for the Fibcache server: the incremental Fibonacci engine
//! and the cache store abstraction it computes against.
//!
//! The engine memoizes Fibonacci numbers in an external key-value store.
//! For a requested index it resumes from the nearest cached checkpoint (a
//! pair of consecutive cached values), fills the gap up to the target while
//! backfilling every newly computed value with a fixed expiration, and
//! reports how many cache lookups hit or missed along the way.
//!
//! ## Example
//!
//! ```
//! use fibcache_core::{MemoryStore, engine};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), fibcache_core::EngineError> {
//! let store = MemoryStore::new();
//!
//! let first = engine::compute(&store, 10).await?;
//! assert_eq!(first.value.to_string(), "55");
//! assert_eq!(first.stats.misses, 9);
//!
//! // Everything up to 10 is now cached.
//! let second = engine::compute(&store, 10).await?;
//! assert_eq!(second.stats.hits, 1);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod keys;
pub mod store;

// Re-exports
pub use engine::{CacheStats, Computation, ENTRY_TTL, compute};
pub use error::{EngineError, StoreError};
pub use keys::{FIB_KEY_PATTERN, FIB_KEY_PREFIX};
pub use store::{CacheStore, MemoryStore};
