/**
 * Register Handler
 *
 * Implements POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Check username uniqueness
 * 2. Hash the password (salted bcrypt)
 * 3. Insert the user row
 * 4. Issue a bearer token by running the normal login path against the
 *    just-created credentials
 *
 * # Errors
 *
 * * `400 Bad Request` - missing username or password
 * * `409 Conflict` - username already exists
 * * `500 Internal Server Error` - store failure
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::core;
use crate::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::error::ApiError;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "hunter2"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "base64-opaque-token"}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!(username = %request.username, "registration request");

    let token = core::register(&pool, &request.username, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}
