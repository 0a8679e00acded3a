//! Cache inspection and invalidation endpoint handlers.

use std::str::FromStr;

use axum::{
    Json,
    extract::State,
};
use serde::Serialize;
use tracing::instrument;

use fibcache_core::{FIB_KEY_PATTERN, keys};

use crate::error::AppError;
use crate::state::AppState;

/// Response para operaciones de invalidación.
#[derive(Debug, Serialize)]
pub struct ClearCacheResponse {
    /// Número de entries eliminadas.
    pub invalidated: u64,
    /// Mensaje descriptivo.
    pub message: String,
}

/// DELETE /fibonacci/cache
/// Removes every entry under the Fibonacci key namespace.
#[instrument(skip_all)]
pub async fn clear_cache(
    State(state): State<AppState>,
) -> Result<Json<ClearCacheResponse>, AppError> {
    let keys = state.store().keys(FIB_KEY_PATTERN).await?;
    if keys.is_empty() {
        return Ok(Json(ClearCacheResponse {
            invalidated: 0,
            message: "No cache entries found".to_string(),
        }));
    }

    let invalidated = state.store().delete(&keys).await?;

    tracing::info!(count = invalidated, "cache entries cleared");

    Ok(Json(ClearCacheResponse {
        invalidated,
        message: format!("Cleared {invalidated} cache entries"),
    }))
}

#[derive(Debug, Serialize)]
pub struct CacheEntry {
    pub n: u64,
    /// Null when the entry expired between enumeration and read.
    pub fibonacci: Option<serde_json::Number>,
    /// Null when the entry is absent or carries no expiration.
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CacheListResponse {
    pub total_cached_entries: usize,
    pub entries: Vec<CacheEntry>,
}

/// GET /fibonacci/cache
/// Enumerates every cached entry, sorted ascending by index.
#[instrument(skip_all)]
pub async fn list_cache(State(state): State<AppState>) -> Result<Json<CacheListResponse>, AppError> {
    let store = state.store();
    let cache_keys = store.keys(FIB_KEY_PATTERN).await?;

    let mut entries = Vec::with_capacity(cache_keys.len());
    for key in cache_keys {
        let Some(n) = keys::parse_entry_key(&key) else {
            continue;
        };

        let fibonacci = match store.get(&key).await? {
            Some(raw) => Some(
                serde_json::Number::from_str(&raw)
                    .map_err(|_| AppError::Internal(format!("corrupt cache entry '{key}'")))?,
            ),
            None => None,
        };
        let ttl_seconds = store.ttl(&key).await?.map(|ttl| ttl.as_secs());

        entries.push(CacheEntry {
            n,
            fibonacci,
            ttl_seconds,
        });
    }

    entries.sort_unstable_by_key(|entry| entry.n);

    Ok(Json(CacheListResponse {
        total_cached_entries: entries.len(),
        entries,
    }))
}
