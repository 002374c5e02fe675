/**
 * Server Initialization
 *
 * Assembles the application: opens the store, builds the state, and
 * configures the router.
 */

use axum::Router;

use crate::routes::create_router;
use crate::server::config::{self, Config};
use crate::server::state::AppState;

/// Create the configured application router.
///
/// # Errors
///
/// Fails when the store cannot be opened or migrated; every route needs
/// the store, so there is no degraded mode without it.
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    let pool = config::load_database(&config.database_url).await?;
    let state = AppState::new(pool, config);

    Ok(create_router(state))
}
