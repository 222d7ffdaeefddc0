use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// The single rejection the access guard exposes to clients.
///
/// Every internal failure kind (missing header, wrong scheme, malformed
/// token, bad signature, expiry) collapses into this one response so callers
/// cannot probe why a token was refused.
#[derive(Error, Debug)]
#[error("Unauthorized: Invalid or Missing Token")]
pub struct UnauthorizedError;

impl IntoResponse for UnauthorizedError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
