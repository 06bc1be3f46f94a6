//! Schema bootstrap
//!
//! Creates the `movies` table and its indexes if they are absent. There is
//! no migration history; statements are idempotent and run on every start.

use sqlx::SqlitePool;
use tracing::debug;

use super::DbError;

/// Create the movies table and indexes if missing.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    // AUTOINCREMENT: ids of deleted rows are never handed out again
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            genre TEXT NOT NULL,
            rating INTEGER NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await
    .map_err(DbError::schema("movies table"))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_movies_title ON movies (title)")
        .execute(pool)
        .await
        .map_err(DbError::schema("title index"))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_movies_genre ON movies (genre)")
        .execute(pool)
        .await
        .map_err(DbError::schema("genre index"))?;

    debug!("movies schema ready");
    Ok(())
}
