//! Fibonacci endpoint handler.

use std::str::FromStr;
use std::time::Instant;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use fibcache_core::{CacheStats, engine};

use crate::error::AppError;
use crate::metrics::cache::record_request_stats;
use crate::state::AppState;

/// Largest accepted index. F(100000) already has ~20900 decimal digits.
pub const MAX_INDEX: i64 = 100_000;

#[derive(Debug, Serialize)]
pub struct FibonacciResponse {
    pub n: i64,
    /// Arbitrary-precision JSON integer.
    pub fibonacci: serde_json::Number,
    pub computation_time_ms: f64,
    pub stats: RequestStats,
}

/// Per-request cache lookup statistics.
#[derive(Debug, Serialize)]
pub struct RequestStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_miss_rate_percent: f64,
}

impl From<&CacheStats> for RequestStats {
    fn from(stats: &CacheStats) -> Self {
        Self {
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            cache_miss_rate_percent: round2(stats.miss_rate_percent()),
        }
    }
}

/// GET /fibonacci/{n}
#[instrument(skip_all, fields(n = n))]
pub async fn get_fibonacci(
    State(state): State<AppState>,
    Path(n): Path<i64>,
) -> Result<Json<FibonacciResponse>, AppError> {
    if n < 0 {
        return Err(AppError::BadRequest(
            "Fibonacci is not defined for negative numbers".to_string(),
        ));
    }
    if n > MAX_INDEX {
        return Err(AppError::BadRequest(
            "Number too large (max 100,000)".to_string(),
        ));
    }

    let start = Instant::now();
    let computation = engine::compute(state.store(), n).await?;
    let elapsed = start.elapsed();

    record_request_stats(&computation.stats);

    tracing::info!(
        hits = computation.stats.hits,
        misses = computation.stats.misses,
        duration_ms = elapsed.as_millis() as u64,
        "fibonacci computed"
    );

    // serde_json's arbitrary_precision keeps the full decimal expansion.
    let fibonacci = serde_json::Number::from_str(&computation.value.to_string())
        .map_err(|e| AppError::Internal(format!("failed to encode result: {e}")))?;

    Ok(Json(FibonacciResponse {
        n,
        fibonacci,
        computation_time_ms: round2(elapsed.as_secs_f64() * 1000.0),
        stats: RequestStats::from(&computation.stats),
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
