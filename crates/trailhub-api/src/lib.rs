//! # trailhub-api
//!
//! HTTP API layer for TrailHub: Axum handlers, DTOs, middleware, and the
//! router. Maps `AppError` kinds to HTTP status codes at the boundary.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
