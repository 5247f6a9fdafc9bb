//! Conversion of [`AppError`] into HTTP responses.
//!
//! Every error renders as `{"error": <message>, "status": <code>}` JSON.
//! Infrastructure failures are logged with their full detail and replaced
//! with a generic client-facing message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use super::types::AppError;

/// Client-facing message for errors whose detail must stay server-side.
const GENERIC_FAILURE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if self.is_internal() {
            tracing::error!("request failed: {}", self);
            GENERIC_FAILURE.to_string()
        } else {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                tracing::warn!("request refused: {}", self);
            }
            self.to_string()
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}
