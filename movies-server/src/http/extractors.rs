//! Custom Axum extractors
//!
//! Both map framework rejections onto `ApiError::BadRequest` so every
//! input failure is reported the same way, before the store is touched.
//! Transport failures while reading the body (e.g. size limit) keep their
//! own status.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// JSON object body deserialized into a typed payload
///
/// Only objects are accepted; serde would otherwise fill struct fields
/// positionally from an array.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::BytesRejection(inner) => {
                    ApiError::Rejected(inner.status(), inner.body_text())
                }
                other => ApiError::BadRequest(other.body_text()),
            })?;

        if !value.is_object() {
            return Err(ApiError::BadRequest(
                "request body must be a JSON object".to_owned(),
            ));
        }

        let payload = serde_json::from_value(value).map_err(|e| {
            ApiError::BadRequest(format!(
                "Failed to deserialize the JSON body into the target type: {e}"
            ))
        })?;

        Ok(Self(payload))
    }
}

/// Extract an integer movie id from path
pub struct MovieId(pub i64);

impl<S> FromRequestParts<S> for MovieId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest("movie id is required".to_owned()))?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::BadRequest(format!("movie id must be an integer, got '{raw}'"))
        })?;

        Ok(Self(id))
    }
}
