//! # trailhub-service
//!
//! Business logic for TrailHub. The [`audit::AuditService`] validates
//! incoming events, strips sensitive payload keys, stamps identity, and
//! dispatches to the configured store backend.

pub mod audit;

pub use audit::service::AuditService;
