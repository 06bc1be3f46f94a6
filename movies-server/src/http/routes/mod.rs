//! Route handlers organized by resource

pub mod health;
pub mod movies;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Fallback for unmatched paths
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}
