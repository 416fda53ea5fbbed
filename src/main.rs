//! Revenue Dashboard - multi-tenant property revenue backend
//!
//! Serves per-property revenue summaries with tenant-scoped TTL caching
//! and a static fallback when the reservations database is unavailable.

mod api;
mod cache;
mod config;
mod db;
mod error;
mod models;
mod revenue;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::{CacheStore, RevenueCache};
use config::Settings;
use db::DatabasePool;
use revenue::select_source;
use tasks::spawn_cleanup_task;

/// Main entry point for the revenue dashboard backend.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Initialize the database pool; fall back to static revenue data if
///    connectivity cannot be established
/// 4. Create the revenue cache over the selected source
/// 5. Start background TTL cleanup task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revenue_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Revenue Dashboard Backend");

    // Load configuration from environment variables
    let settings = Settings::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cache_max_entries={}, cleanup_interval={}s",
        settings.server_port,
        settings.cache_ttl,
        settings.cache_max_entries,
        settings.cleanup_interval
    );

    // Initialize the database pool; unavailability selects the fallback
    // revenue source instead of aborting
    let init = DatabasePool::initialize(&settings).await;
    let (source, source_kind) = select_source(init);
    info!("Revenue source selected: {}", source_kind.as_str());

    // Create the cache layer and application state
    let cache = RevenueCache::new(
        CacheStore::new(settings.cache_max_entries),
        source,
        settings.cache_ttl,
    );
    let state = AppState::new(cache.clone(), source_kind);
    info!("Revenue cache initialized");

    // Start background cleanup task
    let cleanup_handle = spawn_cleanup_task(cache.store_handle(), settings.cleanup_interval);
    info!("Background cleanup task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
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

    // Abort the cleanup task
    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
