//! Movie record and creation payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted movie. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub rating: i64,
}

/// Creation payload: every field is required and strictly typed.
///
/// Extra fields in the request body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub rating: i64,
}

#[cfg(test)]
impl Movie {
    /// Attach a store-assigned id to a creation payload.
    pub(crate) fn from_new(id: i64, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            genre: new.genre,
            rating: new.rating,
        }
    }
}
