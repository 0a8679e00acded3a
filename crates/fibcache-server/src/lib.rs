//! # Fibcache Server
//!
//! Axum-based HTTP server exposing Redis-memoized Fibonacci computation.
//!
//! Endpoints:
//!
//! - `GET /fibonacci/{n}` — compute F(n), reporting per-request cache stats
//! - `GET /fibonacci/cache` — enumerate cached entries with remaining TTLs
//! - `DELETE /fibonacci/cache` — drop every entry in the Fibonacci namespace
//! - `GET /` — health check
//! - `GET /metrics` — Prometheus exposition

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

// Re-exports
pub use error::AppError;
pub use server::{create_router, create_router_with_metrics, run_server_with_state};
pub use settings::Settings;
pub use state::AppState;
