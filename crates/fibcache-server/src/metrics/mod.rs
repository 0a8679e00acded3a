//! Metrics module for the Fibcache server.

pub mod cache;
pub mod http;
pub mod setup;

pub use setup::init_metrics;

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for the Prometheus scrape endpoint.
pub async fn metrics_handler(State(prometheus): State<PrometheusHandle>) -> impl IntoResponse {
    prometheus.render()
}
