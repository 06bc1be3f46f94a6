//! Database layer - store connector, sessions and repositories
//!
//! # Design Principles
//!
//! - One `Store` per process, built at startup and injected into the router
//! - One `Session` per request, released when dropped
//! - One statement per session; absence is a value, not an error
//! - Rely on single statements for atomicity - no check-then-delete

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use pool::{Store, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use session::Session;
