//! Repository implementations for database access
//!
//! Repositories borrow a `Session` and run single statements on it.

pub mod movies;

pub use movies::{DeleteOutcome, MovieRepo};
