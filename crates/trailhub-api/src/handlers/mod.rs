//! HTTP request handlers.

pub mod audit;
pub mod health;
