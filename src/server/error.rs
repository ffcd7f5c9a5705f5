//! API-level errors.
//!
//! Malformed input is rejected here, at the boundary, before any tree
//! operation runs. The core itself has no failure modes for well-formed
//! keys.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body missing or not a valid `{"value": <int>}` object.
    #[error("Error: {0}")]
    BadRequest(String),

    /// Unknown API path.
    #[error("Not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
