//! Course Service - course catalogue over HTTP
//!
//! Courses live in MongoDB; single-course lookups go through a Redis
//! read-through cache.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_service::api::create_router;
use course_service::cache::RedisCache;
use course_service::store::MongoStore;
use course_service::{AppState, Config};

/// Main entry point for the course service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to MongoDB, then Redis; either failure aborts startup
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM, then close the store client
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting course service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, db={}, cache_ttl={}s",
        config.server_port, config.mongodb_db_name, config.cache_ttl
    );

    info!("Connecting to MongoDB...");
    let store = MongoStore::connect(&config.mongodb_uri, &config.mongodb_db_name)
        .await
        .context("failed to connect to MongoDB")?;
    info!("MongoDB connection successful");

    info!("Connecting to Redis...");
    let cache = RedisCache::connect(&config.redis_uri)
        .await
        .context("failed to connect to Redis")?;
    info!("Redis connection successful");

    let mongo_client = store.client();
    let state = AppState::new(Arc::new(cache), Arc::new(store), config.cache_ttl());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    mongo_client.shutdown().await;
    info!("Cleanly shut down connections");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
