//! movies-server: HTTP server for a small movie catalogue
//!
//! Exposes create/list/get/delete endpoints over a SQLite-backed store.
//! Every request opens its own session, runs one statement, and releases
//! the connection back to the pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Store};
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use models::{Movie, NewMovie};
