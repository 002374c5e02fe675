/**
 * Login Handler
 *
 * Implements POST /auth/login.
 *
 * # Security Notes
 *
 * - Unknown username and wrong password return the identical error, so
 *   the endpoint cannot be used to enumerate usernames
 * - Passwords are verified against the stored salted bcrypt digest
 * - The issued token is returned raw exactly once and stored only as a
 *   digest
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::core;
use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing username or password
/// * `401 Unauthorized` - invalid credentials (either field)
/// * `500 Internal Server Error` - store failure
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!(username = %request.username, "login request");

    let token = core::login(&pool, &request.username, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}
