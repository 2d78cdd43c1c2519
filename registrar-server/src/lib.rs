//! registrar-server: student, course, and enrollment records over HTTP
//!
//! Browser-facing list pages and forms backed by SQLite. Each request runs
//! against its own store `Session`; advisory notices travel with the
//! response, never through shared state.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_memory_pool, create_pool, schema, Session};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
