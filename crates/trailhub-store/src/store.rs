//! Audit store trait for pluggable storage backends.

use async_trait::async_trait;

use trailhub_core::result::AppResult;
use trailhub_entity::{AuditEvent, AuditFilter};

/// Trait for audit event storage backends (PostgreSQL or in-memory).
///
/// The store is append-only: there is no update or delete. Implementations
/// must make `append` atomic with respect to concurrent calls (no lost
/// events) and must let `search` proceed without blocking indefinitely on
/// concurrent appends; returning a snapshot that excludes events appended
/// after the query began is acceptable.
#[async_trait]
pub trait AuditStore: Send + Sync + std::fmt::Debug + 'static {
    /// Append a fully-formed event to the store and return it.
    ///
    /// The caller (the audit service) is responsible for generating `id`
    /// and `at`. A storage failure is propagated, never swallowed: audit
    /// integrity requires callers to know when an action was not logged.
    async fn append(&self, event: AuditEvent) -> AppResult<AuditEvent>;

    /// Return all events matching the filter, sorted descending by `at`.
    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>>;

    /// Count all stored events.
    async fn count(&self) -> AppResult<u64>;

    /// Check backend connectivity.
    async fn health_check(&self) -> AppResult<()>;

    /// Human-readable backend name for health reporting.
    fn backend(&self) -> &'static str;
}
