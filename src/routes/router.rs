/**
 * Router Configuration
 *
 * Combines the route groups into the application router and applies the
 * cross-cutting layers: permissive CORS (the API is consumed from
 * browsers on other origins) and per-request tracing.
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes::auth_routes::configure_auth_routes;
use crate::routes::content_routes::configure_content_routes;
use crate::server::state::AppState;

/// Create the application router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", configure_auth_routes(state.clone()))
        .nest("/v1", configure_content_routes())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
