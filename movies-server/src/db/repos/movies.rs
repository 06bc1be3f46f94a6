//! Movie repository
//!
//! - insert: INSERT ... RETURNING (id assigned in the same statement)
//! - get: `None` when absent
//! - delete: single DELETE, absence derived from affected rows

use tracing::debug;

use crate::db::{DbError, Session};
use crate::models::{Movie, NewMovie};

/// Result of a delete by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Movie repository
pub struct MovieRepo<'a> {
    session: &'a mut Session,
}

impl<'a> MovieRepo<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Persist a new movie and return it with its assigned id.
    pub async fn insert(&mut self, new: &NewMovie) -> Result<Movie, DbError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, genre, rating)
            VALUES (?, ?, ?)
            RETURNING id, title, genre, rating
            "#,
        )
        .bind(new.title.as_str())
        .bind(new.genre.as_str())
        .bind(new.rating)
        .fetch_one(self.session.connection())
        .await?;

        Ok(movie)
    }

    /// All movies in insertion order.
    pub async fn list_all(&mut self) -> Result<Vec<Movie>, DbError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, genre, rating FROM movies ORDER BY id",
        )
        .fetch_all(self.session.connection())
        .await?;

        debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Movie>, DbError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, genre, rating FROM movies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.session.connection())
        .await?;

        Ok(movie)
    }

    /// Remove a movie. Concurrent deletes of the same id resolve in the
    /// store: exactly one of them observes `Deleted`.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<DeleteOutcome, DbError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(self.session.connection())
            .await?;

        Ok(if result.rows_affected() == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        })
    }
}
