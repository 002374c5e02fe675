/**
 * Logout Handler
 *
 * Implements POST /auth/logout. Revokes the presented bearer token by
 * deleting its digest row. An already-revoked (or never-issued) token is
 * reported as 401, the same as a missing or malformed header.
 */

use axum::{extract::State, http::HeaderMap, response::Json};
use sqlx::SqlitePool;

use crate::auth::core;
use crate::error::ApiError;
use crate::middleware::auth::extract_bearer_token;

/// Logout handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing/malformed header, or the token was
///   already revoked
/// * `500 Internal Server Error` - store failure
pub async fn logout(
    State(pool): State<SqlitePool>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = extract_bearer_token(&headers)?;

    match core::revoke_token(&pool, &token).await {
        Ok(()) => {
            tracing::info!("token revoked");
            Ok(Json(serde_json::json!({ "ok": true })))
        }
        // Revoking an unknown token is an auth failure at this endpoint,
        // not a 404.
        Err(ApiError::NotFound { .. }) => Err(ApiError::Unauthenticated),
        Err(e) => Err(e),
    }
}
