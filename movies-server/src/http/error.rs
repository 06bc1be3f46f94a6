//! API error types with IntoResponse
//!
//! Errors are converted to `{"detail": ...}` JSON bodies with matching
//! status codes. Store faults are logged and replaced by a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Message used for every missing-movie response.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body, missing/mistyped field or non-integer id (422)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Body could not be read at all, e.g. over the size limit (status kept)
    #[error("request rejected ({0}): {1}")]
    Rejected(StatusCode, String),

    /// Target does not exist (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Persistence failure (500, logged)
    #[error(transparent)]
    Store(#[from] DbError),
}

impl ApiError {
    pub fn movie_not_found() -> Self {
        Self::NotFound(MOVIE_NOT_FOUND.to_owned())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected(status, _) => *status,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::BadRequest(message) | Self::Rejected(_, message) | Self::NotFound(message) => {
                message
            }
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "store fault");
                "Internal Server Error".to_owned()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_422() {
        let response = ApiError::BadRequest("rating missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["detail"], "rating missing");
    }

    #[tokio::test]
    async fn rejected_keeps_its_status() {
        let response =
            ApiError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["detail"], "length limit exceeded");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::movie_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Movie not found" })
        );
    }

    #[tokio::test]
    async fn store_fault_is_500_without_details() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal Server Error");
    }
}
