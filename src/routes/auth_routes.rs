/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `POST /auth/register` - public, creates a user and returns a token
 * - `POST /auth/login`    - public, returns a fresh token
 * - `POST /auth/logout`   - revokes the presented bearer token
 * - `GET  /auth/me`       - behind require_auth, returns the caller
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::{login, logout, me, register};
use crate::middleware::require_auth;
use crate::server::state::AppState;

/// Configure authentication routes.
///
/// The state handle is needed here (and not just at `with_state` time)
/// because the require_auth layer resolves tokens against the store.
pub fn configure_auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(protected)
}
