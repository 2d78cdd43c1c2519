//! HTTP layer
//!
//! Axum server with:
//! - Explicit route table built at startup
//! - Integer path parameters validated before dispatch
//! - Request tracing and timeout
//! - Graceful shutdown
//! - HTML error pages

pub mod server;
pub mod error;
pub mod extractors;
pub mod outcome;
pub mod routes;
pub mod views;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::PageError;
pub use outcome::Outcome;
