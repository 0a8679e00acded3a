//! Test helpers for fibcache-server.

#![allow(dead_code)]

pub mod client;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use fibcache_core::{CacheStore, MemoryStore, StoreError};
use fibcache_server::{AppState, create_router};

pub use client::{TestClient, TestResponse};

/// In-memory store plus the state wrapping it, so tests can inspect the
/// store directly while driving it over HTTP.
pub fn test_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), AppState::new(store))
}

/// Test client over a fresh in-memory store.
pub fn client() -> TestClient {
    let (_, state) = test_state();
    TestClient::new(create_router(state))
}

/// Test client whose store fails every operation.
pub fn client_with_broken_store() -> TestClient {
    let state = AppState::with_store(BrokenStore);
    TestClient::new(create_router(state))
}

/// Store double that fails every operation, simulating a dead Redis.
pub struct BrokenStore;

#[async_trait]
impl CacheStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn delete(&self, _keys: &[String]) -> Result<u64, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn keys(&self, _pattern: &str) -> Result<Vec<String>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn ttl(&self, _key: &str) -> Result<Option<Duration>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}
