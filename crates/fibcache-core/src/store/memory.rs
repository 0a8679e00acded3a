//! In-memory cache store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::CacheStore;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// Mutex-guarded in-process [`CacheStore`].
///
/// Expired entries are dropped lazily on access rather than by a background
/// sweeper; precise eviction timing is not part of the store contract.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().expect("memory store mutex poisoned")
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let mut entries = self.lock();

        let expired = match entries.get(key) {
            Some(entry) => {
                if !entry.is_expired(now) {
                    return Ok(Some(entry.value.clone()));
                }
                true
            }
            None => false,
        };

        if expired {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Some(Instant::now() + ttl),
        };
        self.lock().insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<u64, StoreError> {
        let now = Instant::now();
        let mut entries = self.lock();

        let mut removed = 0;
        for key in keys {
            if let Some(entry) = entries.remove(key) {
                if !entry.is_expired(now) {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let matcher = glob::Pattern::new(pattern).map_err(|e| StoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let now = Instant::now();
        let entries = self.lock();

        Ok(entries
            .iter()
            .filter(|(key, entry)| !entry.is_expired(now) && matcher.matches(key))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        let now = Instant::now();
        let entries = self.lock();

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                Ok(entry.expires_at.map(|deadline| deadline - now))
            }
            _ => Ok(None),
        }
    }
}
