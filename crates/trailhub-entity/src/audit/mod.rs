//! Audit event entity and query filter.

pub mod filter;
pub mod model;
