/**
 * Authentication Middleware
 *
 * Protects routes that require a valid bearer token. Transport framing
 * (the Authorization header) is inspected here and nowhere else; header
 * parsing never contacts the store.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};

use crate::auth::core;
use crate::auth::users::User;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user attached to request extensions by [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Pull the raw bearer token out of the Authorization header.
///
/// Accepts exactly `Bearer <token>`: a case-insensitive scheme followed
/// by a single space-separated continuation. Anything else - missing
/// header, wrong scheme, no token, extra tokens - is a malformed header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::malformed_header("missing authorization header"))?;

    let parts: Vec<&str> = header.trim().split(' ').collect();
    if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("bearer") || parts[1].is_empty() {
        return Err(ApiError::malformed_header("invalid authorization header format"));
    }

    Ok(parts[1].to_string())
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Resolves it to a user through the auth core (digest lookup)
/// 3. Attaches the user to request extensions for downstream handlers
///
/// Any failure is a 401; the response does not say which step rejected.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;
    let user = core::validate_token(&state.pool, &token).await?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(user));

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Usable as a handler parameter on any route wired behind
/// [`require_auth`]; rejects with 401 if the middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser(user))
    }
}
