//! Incremental Fibonacci engine.
//!
//! Computes F(n) against an external cache store: after a direct-hit check
//! on the target, it scans backwards for the nearest pair of consecutive
//! cached values, resumes additive iteration from that checkpoint and
//! backfills every newly computed index with a fixed expiration.
//!
//! The hit/miss counters are an observable part of the contract, not a
//! debugging aid. A lookup counts exactly when the rules below say it does:
//!
//! - direct-hit check: one hit when the target is cached, nothing on a miss;
//! - backward scan: nothing for an absent candidate; a hit for a cached
//!   candidate, then a hit for its cached predecessor (checkpoint locked)
//!   or a miss for its absent predecessor (checkpoint rejected);
//! - forward fill: one hit or miss per index visited.

use std::time::Duration;

use num_bigint::BigUint;

use crate::error::EngineError;
use crate::keys::entry_key;
use crate::store::CacheStore;

/// Fixed expiration applied to every entry the engine writes.
pub const ENTRY_TTL: Duration = Duration::from_secs(3600);

/// Cache lookup counters for a single request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Share of lookups that missed, as a percentage. Zero when no lookups
    /// were performed.
    pub fn miss_rate_percent(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64 * 100.0
        }
    }
}

/// Result of one engine run: the value and the lookup counters.
#[derive(Debug)]
pub struct Computation {
    pub value: BigUint,
    pub stats: CacheStats,
}

/// Computes F(n), consulting and populating the cache store.
///
/// Negative `n` fails with [`EngineError::InvalidArgument`] before any store
/// access. Indices 0 and 1 are answered from the closed-form base cases and
/// never cached. Store failures propagate unchanged; the engine does not
/// retry or fall back to pure computation.
pub async fn compute(store: &dyn CacheStore, n: i64) -> Result<Computation, EngineError> {
    if n < 0 {
        return Err(EngineError::InvalidArgument(n));
    }
    let n = n as u64;

    let mut stats = CacheStats::default();

    if n <= 1 {
        return Ok(Computation {
            value: BigUint::from(n),
            stats,
        });
    }

    // Direct hit on the target short-circuits everything else.
    if let Some(value) = lookup(store, n).await? {
        stats.hits += 1;
        tracing::debug!(n, "target already cached");
        return Ok(Computation { value, stats });
    }

    // Backward scan: nearest candidate whose predecessor is also cached.
    // A lone cached value cannot seed additive iteration, so a candidate
    // with a missing predecessor is scanned past.
    let mut next = 2u64;
    let mut a = BigUint::from(0u8);
    let mut b = BigUint::from(1u8);

    for i in (2..=n).rev() {
        let Some(value) = lookup(store, i).await? else {
            continue;
        };
        stats.hits += 1;

        match lookup(store, i - 1).await? {
            Some(prev) => {
                stats.hits += 1;
                next = i + 1;
                a = prev;
                b = value;
                tracing::debug!(n, checkpoint = i, "resuming from cached checkpoint");
                break;
            }
            None => stats.misses += 1,
        }
    }

    // Forward fill up to the target. Each index is re-checked against the
    // store: entries written by concurrent requests since the scan are
    // trusted as authoritative and never recomputed or overwritten.
    for i in next..=n {
        match lookup(store, i).await? {
            Some(value) => {
                stats.hits += 1;
                a = std::mem::replace(&mut b, value);
            }
            None => {
                stats.misses += 1;
                let value = &a + &b;
                store
                    .set_with_expiry(&entry_key(i), &value.to_string(), ENTRY_TTL)
                    .await?;
                a = std::mem::replace(&mut b, value);
            }
        }
    }

    Ok(Computation { value: b, stats })
}

/// Fetches and decodes the entry for `index`.
async fn lookup(store: &dyn CacheStore, index: u64) -> Result<Option<BigUint>, EngineError> {
    let key = entry_key(index);
    let Some(raw) = store.get(&key).await? else {
        return Ok(None);
    };

    match raw.parse::<BigUint>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(EngineError::CorruptEntry { key, value: raw }),
    }
}
