//! Application state.

use std::sync::Arc;

use fibcache_core::CacheStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The cache store backing the Fibonacci engine.
    store: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Creates an AppState owning the given store.
    pub fn with_store<S: CacheStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the cache store.
    pub fn store(&self) -> &dyn CacheStore {
        self.store.as_ref()
    }
}
