//! Movie endpoints
//!
//! Each handler opens one session, runs one repository call, and lets the
//! session drop before the response is serialized.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::{debug, info};

use crate::db::{DeleteOutcome, MovieRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{MovieId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Movie, NewMovie};

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub id: i64,
}

/// POST /movies - create a movie
async fn create_movie(
    State(state): State<Arc<AppState>>,
    ValidJson(new): ValidJson<NewMovie>,
) -> Result<Json<Movie>, ApiError> {
    let mut session = state.store.open_session().await?;
    let movie = MovieRepo::new(&mut session).insert(&new).await?;

    info!(id = movie.id, title = %movie.title, "movie created");
    Ok(Json(movie))
}

/// GET /movies - list all movies
async fn list_movies(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Movie>>, ApiError> {
    let mut session = state.store.open_session().await?;
    let movies = MovieRepo::new(&mut session).list_all().await?;
    Ok(Json(movies))
}

/// GET /movies/{id} - get a single movie
async fn get_movie(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> Result<Json<Movie>, ApiError> {
    let mut session = state.store.open_session().await?;
    let movie = MovieRepo::new(&mut session)
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::movie_not_found)?;

    debug!(id, "movie fetched");
    Ok(Json(movie))
}

/// DELETE /movies/{id} - delete a movie
async fn delete_movie(
    State(state): State<Arc<AppState>>,
    MovieId(id): MovieId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut session = state.store.open_session().await?;
    let outcome = MovieRepo::new(&mut session).delete_by_id(id).await?;

    match outcome {
        DeleteOutcome::Deleted => {
            info!(id, "movie deleted");
            Ok(Json(DeleteResponse {
                status: "deleted",
                id,
            }))
        }
        DeleteOutcome::NotFound => Err(ApiError::movie_not_found()),
    }
}

/// Movie routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).delete(delete_movie))
}
