//! # trailhub-entity
//!
//! Domain entity models for TrailHub: the audit event record, its
//! creation payload, and the query filter.

pub mod audit;

pub use audit::filter::AuditFilter;
pub use audit::model::{AuditEvent, RecordAuditEvent};
