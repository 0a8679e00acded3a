//! Metrics setup and initialization.

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

/// Initializes the metrics recorder and returns the handle backing the
/// scrape endpoint. Must be called once per process.
pub fn init_metrics() -> PrometheusHandle {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();

    // Histogram buckets in seconds. A cold request for a large index walks
    // the store once per candidate index, so the tail is long.
    let handle = builder
        .set_buckets(&[
            0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
        ])
        .expect("failed to set histogram buckets")
        .install_recorder()
        .expect("failed to install metrics recorder");

    crate::metrics::http::register_http_metrics();
    crate::metrics::cache::register_cache_metrics();

    info!("Metrics system initialized");
    handle
}
