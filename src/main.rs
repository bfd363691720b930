//! TrailHub Server — Audit Trail Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use trailhub_api::AppState;
use trailhub_core::config::AppConfig;
use trailhub_core::error::AppError;
use trailhub_store::{AuditStore, MemoryAuditStore, PgAuditStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TRAILHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TrailHub v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let state = AppState::new(config.clone(), store);
    let router = trailhub_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Construct the configured audit store backend.
async fn build_store(config: &AppConfig) -> Result<Arc<dyn AuditStore>, AppError> {
    match config.store.backend.as_str() {
        "postgres" => {
            let pool = trailhub_store::connection::create_pool(&config.database).await?;
            trailhub_store::migration::run_migrations(&pool).await?;
            Ok(Arc::new(PgAuditStore::new(pool)))
        }
        "memory" => {
            tracing::warn!("Using in-memory audit store; events are lost on restart");
            Ok(Arc::new(MemoryAuditStore::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown store backend '{other}' (expected 'postgres' or 'memory')"
        ))),
    }
}

/// Resolve when a shutdown signal is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
