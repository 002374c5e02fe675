/**
 * Chat Message Route Handlers
 *
 * Reads are public; the insert endpoint is called by the chat-logging
 * bot with the static API key. Channel path parameters arrive without
 * the leading '#': it is added (and the name lowercased) before lookup.
 */

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::messages::db::{self, ChatMessage, NewMessage};
use crate::middleware::require_static_key;
use crate::server::state::AppState;

/// How far back the unparameterized message listing reaches.
const RECENT_WINDOW_DAYS: i64 = 3;

/// Message ingest request. The timestamp is Unix seconds, as sent by the
/// logging bot; it is stored and served in milliseconds.
#[derive(Deserialize, Debug)]
pub struct InsertMessageRequest {
    pub timestamp: Option<i64>,
    pub channel: Option<String>,
    pub user: Option<String>,
    pub content: Option<String>,
    pub display_name: Option<String>,
}

fn channel_key(channel_name: &str) -> String {
    format!("#{}", channel_name.to_lowercase())
}

/// Messages for a channel from the last three days.
pub async fn recent_messages(
    State(pool): State<SqlitePool>,
    Path(channel_name): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let cutoff_ms = (Utc::now() - Duration::days(RECENT_WINDOW_DAYS)).timestamp_millis();
    let messages = db::messages_from(&pool, &channel_key(&channel_name), cutoff_ms).await?;

    Ok(Json(messages))
}

/// Messages for a channel strictly after a millisecond timestamp.
pub async fn messages_since(
    State(pool): State<SqlitePool>,
    Path((channel_name, timestamp)): Path<(String, i64)>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = db::messages_after(&pool, &channel_key(&channel_name), timestamp).await?;

    Ok(Json(messages))
}

/// Insert one archived message.
///
/// # Errors
///
/// * `403` / `401` - missing / wrong API key
/// * `400 Bad Request` - missing required parameters
/// * `500 Internal Server Error` - store failure
pub async fn insert_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<InsertMessageRequest>,
) -> Result<Json<String>, ApiError> {
    require_static_key(&headers, state.config.message_api_key.as_deref())?;

    let missing = || ApiError::invalid_input("missing required parameters");
    let non_empty = |field: Option<String>| field.filter(|v| !v.is_empty());

    let message = NewMessage {
        timestamp: request.timestamp.ok_or_else(missing)? * 1_000,
        channel: non_empty(request.channel).ok_or_else(missing)?,
        user: non_empty(request.user).ok_or_else(missing)?,
        content: non_empty(request.content).ok_or_else(missing)?,
        display_name: non_empty(request.display_name).ok_or_else(missing)?,
    };

    let inserted = db::insert_message(&state.pool, &message).await?;

    state.notifier.message_added(&message.channel);
    tracing::info!(channel = %message.channel, "archived {} chat message(s)", inserted);

    Ok(Json(format!("Inserted {inserted} rows.")))
}
