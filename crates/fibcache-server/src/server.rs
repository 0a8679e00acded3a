use std::net::SocketAddr;

use axum::{Router, middleware::from_fn, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    cache::{clear_cache, list_cache},
    fibonacci::get_fibonacci,
    health::health_check,
};
use crate::metrics::{http::track_requests, metrics_handler};
use crate::middleware::request_context;
use crate::state::AppState;

/// Creates the application router with the given state.
pub fn create_router(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(from_fn(request_context))
        .layer(from_fn(track_requests))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(health_check))
        // Fibonacci routes; the static "cache" segment wins over {n}
        .route("/fibonacci/{n}", get(get_fibonacci))
        .route("/fibonacci/cache", get(list_cache).delete(clear_cache))
        .with_state(state)
        .layer(middleware_stack)
}

/// Creates the application router plus the Prometheus scrape endpoint.
pub fn create_router_with_metrics(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    // Router for the metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    create_router(state).merge(metrics_router)
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server_with_state(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router_with_metrics(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
