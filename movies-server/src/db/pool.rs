//! Store connector
//!
//! Wraps a sqlx `SqlitePool` with explicit connection limits. Built once at
//! startup and handed to the router; handlers only ever see it through
//! `open_session`.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use super::{schema, DbError, Session};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database file used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://movies.db";

/// Process-lifetime handle to the movie store.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database at `database_url` and
    /// ensure the schema exists.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::connect("sqlite://movies.db").await?;
    /// ```
    pub async fn connect(database_url: &str) -> Result<Self, DbError> {
        Self::connect_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Like [`Store::connect`] with a custom pool size.
    pub async fn connect_with_options(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        schema::ensure_schema(&pool).await?;
        info!(database_url, max_connections, "store connected");

        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds exactly one connection that never idles out, since an
    /// in-memory SQLite database lives only as long as its connection.
    pub async fn connect_in_memory() -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        schema::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Acquire a session for one operation.
    pub async fn open_session(&self) -> Result<Session, DbError> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }

    /// Close the pool, waiting for checked-out sessions to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_opens_sessions() {
        let store = Store::connect_in_memory().await.unwrap();

        // Released on drop, so the single connection can be reacquired
        drop(store.open_session().await.unwrap());
        drop(store.open_session().await.unwrap());
    }

    #[tokio::test]
    async fn file_store_is_created_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("movies.db").display());

        let store = Store::connect(&url).await.unwrap();
        {
            let mut session = store.open_session().await.unwrap();
            crate::db::MovieRepo::new(&mut session)
                .insert(&crate::models::NewMovie {
                    title: "Alien".into(),
                    genre: "Horror".into(),
                    rating: 8,
                })
                .await
                .unwrap();
        }
        store.close().await;

        let reopened = Store::connect(&url).await.unwrap();
        let mut session = reopened.open_session().await.unwrap();
        let movies = crate::db::MovieRepo::new(&mut session)
            .list_all()
            .await
            .unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Alien");
    }
}
