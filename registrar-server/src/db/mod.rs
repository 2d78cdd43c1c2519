//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one connection-scoped `Session` per request
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Every operation is a single statement

pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
pub use session::Session;
