//! Per-request store session

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

/// A single pooled connection, scoped to one logical operation.
///
/// Dropping the session returns the connection to the pool, so a session
/// that goes out of scope on any path (success, error, panic) is released.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
