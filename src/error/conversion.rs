/**
 * Error Conversion
 *
 * Converts [`ApiError`] values into HTTP responses so handlers can return
 * them directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "username already exists",
 *   "kind": "conflict",
 *   "status": 409
 * }
 * ```
 *
 * Server-side failures (5xx) are logged here with their full internal
 * representation; the response body only ever carries the generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(kind = self.kind(), "request rejected");
        }

        let body = serde_json::json!({
            "error": self.message(),
            "kind": self.kind(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
