/**
 * Server Configuration
 *
 * Loads configuration from environment variables (a .env file is read by
 * main before this runs) and opens the store.
 *
 * # Error Handling
 *
 * The store is required: a connection or migration failure aborts
 * startup. The static keys and Twitch credentials are optional; an
 * endpoint whose secret is absent fails closed at request time, and a
 * warning is logged at startup so the operator can tell why.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Runtime configuration, collected once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (PORT)
    pub port: u16,
    /// Store location (DATABASE_URL)
    pub database_url: String,
    /// Static key for message ingest (API_KEY)
    pub message_api_key: Option<String>,
    /// Static key for clip ingest/removal (CLIP_KEY)
    pub clip_key: Option<String>,
    /// Shared password for wiki page creation (WIKI_PASSWORD)
    pub wiki_password: Option<String>,
    /// Helix application client id (TWITCH_CLIENT_ID)
    pub twitch_client_id: Option<String>,
    /// Helix Authorization header value (TWITCH_OAUTH)
    pub twitch_oauth_token: Option<String>,
    /// Helix base URL (TWITCH_API_URL); overridden in tests
    pub twitch_api_url: String,
    /// Base URL pinged after ingest (NOTIFY_BASE_URL); no pings if unset
    pub notify_base_url: Option<String>,
}

const DEFAULT_PORT: u16 = 2001;
const DEFAULT_DATABASE_URL: &str = "sqlite://streamvault.db?mode=rwc";
const DEFAULT_TWITCH_API_URL: &str = "https://api.twitch.tv/helix";

fn optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            tracing::warn!("{} not set; dependent endpoints are disabled", name);
            None
        }
    }
}

impl Config {
    /// Collect configuration from the environment.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            port,
            database_url,
            message_api_key: optional("API_KEY"),
            clip_key: optional("CLIP_KEY"),
            wiki_password: optional("WIKI_PASSWORD"),
            twitch_client_id: optional("TWITCH_CLIENT_ID"),
            twitch_oauth_token: optional("TWITCH_OAUTH"),
            twitch_api_url: std::env::var("TWITCH_API_URL")
                .unwrap_or_else(|_| DEFAULT_TWITCH_API_URL.to_string()),
            notify_base_url: std::env::var("NOTIFY_BASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Open the store and bring the schema up to date.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("connecting to store at {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("running store migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
