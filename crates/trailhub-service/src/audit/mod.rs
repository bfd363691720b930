//! Audit recording and query service.

pub mod redact;
pub mod service;
