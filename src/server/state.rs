/**
 * Application State
 *
 * The central state container handed to the router. All request-scoped
 * data lives in the store; the state only carries the injected store
 * handle, the configuration, and the outbound HTTP clients.
 *
 * # State Extraction
 *
 * `FromRef` implementations let handlers extract just the piece they
 * need: most read-only handlers take `State<SqlitePool>` and never see
 * the rest.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::clips::TwitchClient;
use crate::server::config::Config;
use crate::server::notify::Notifier;

/// Application state for the Axum router.
#[derive(Clone)]
pub struct AppState {
    /// Store handle. Injected here (never a process-wide singleton) so
    /// tests can substitute an in-memory store.
    pub pool: SqlitePool,
    /// Runtime configuration
    pub config: Arc<Config>,
    /// Helix client for clip metadata
    pub twitch: TwitchClient,
    /// Fire-and-forget webhook client
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let http = reqwest::Client::new();

        Self {
            pool,
            twitch: TwitchClient::new(http.clone(), &config),
            notifier: Notifier::new(http, &config),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
