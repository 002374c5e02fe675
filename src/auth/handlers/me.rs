/**
 * Current User Handler
 *
 * Implements GET /auth/me behind the require_auth middleware. The
 * middleware has already resolved the bearer token to a user; this
 * handler only shapes the response.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no authenticated user on the request (the
///   middleware rejected it, or the route was wired without it)
pub async fn me(AuthUser(user): AuthUser) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
        created_at: user.created_at,
    }))
}
