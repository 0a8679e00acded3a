//! Fibcache Server binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fibcache_redis::RedisStore;
use fibcache_server::{AppState, Settings, metrics::init_metrics, run_server_with_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get server configuration from environment
    let settings = Settings::from_env().context("failed to load settings")?;
    let addr: SocketAddr = settings
        .listen_addr()
        .parse()
        .context("invalid listen address")?;

    tracing::info!("Starting Fibcache Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Redis target: {}:{} (db {})",
        settings.redis.host,
        settings.redis.port,
        settings.redis.db
    );

    // Connect to the cache store (fails fast if Redis is unreachable)
    let store = RedisStore::connect(&settings.redis)
        .await
        .context("failed to connect to Redis")?;

    tracing::info!(
        "Connected to Redis at {}:{}",
        settings.redis.host,
        settings.redis.port
    );

    // Install the metrics recorder
    let prometheus_handle = init_metrics();

    // Create application state
    let state = AppState::with_store(store);

    // Run server
    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}
