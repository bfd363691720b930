//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use trailhub_core::config::AppConfig;
use trailhub_service::AuditService;
use trailhub_store::AuditStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Audit recording and query service.
    pub audit_service: Arc<AuditService>,
    /// Store backend, held directly for health checks.
    pub store: Arc<dyn AuditStore>,
}

impl AppState {
    /// Assemble state from an already-constructed store.
    pub fn new(config: AppConfig, store: Arc<dyn AuditStore>) -> Self {
        let audit_service = Arc::new(AuditService::new(
            Arc::clone(&store),
            config.audit.clone(),
        ));
        Self {
            config: Arc::new(config),
            audit_service,
            store,
        }
    }
}
