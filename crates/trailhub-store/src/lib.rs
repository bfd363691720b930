//! # trailhub-store
//!
//! Audit store backends for TrailHub: the [`AuditStore`] trait, a
//! PostgreSQL implementation, and an in-memory implementation for tests
//! and local development. Also owns connection pool management and the
//! migration runner.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use memory::MemoryAuditStore;
pub use postgres::PgAuditStore;
pub use store::AuditStore;
