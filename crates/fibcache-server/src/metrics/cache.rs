//! Cache metrics recording.

use metrics::counter;

use fibcache_core::CacheStats;

/// Registra las metricas de cache.
/// Llamar una vez al inicio para registrar las metricas.
pub fn register_cache_metrics() {
    metrics::describe_counter!(
        "fibcache_cache_hits_total",
        "Total number of cache lookup hits across all requests"
    );
    metrics::describe_counter!(
        "fibcache_cache_misses_total",
        "Total number of cache lookup misses across all requests"
    );
}

/// Folds one request's lookup counters into the process-wide totals.
pub fn record_request_stats(stats: &CacheStats) {
    if stats.hits > 0 {
        counter!("fibcache_cache_hits_total").increment(stats.hits);
    }
    if stats.misses > 0 {
        counter!("fibcache_cache_misses_total").increment(stats.misses);
    }
}
