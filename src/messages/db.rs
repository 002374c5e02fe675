/**
 * Database Operations for Archived Chat Messages
 *
 * Messages arrive from a chat-logging bot and are served back to clients
 * by channel and time window. Timestamps are Unix milliseconds, which is
 * also the wire format.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// Archived chat message as persisted and served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: i64,
    /// Unix milliseconds
    pub timestamp: i64,
    /// Channel name including the leading '#'
    pub channel: String,
    /// Login name of the sender
    pub user: String,
    pub content: String,
    pub display_name: String,
}

/// Fields for a message about to be inserted.
#[derive(Debug)]
pub struct NewMessage {
    pub timestamp: i64,
    pub channel: String,
    pub user: String,
    pub content: String,
    pub display_name: String,
}

/// Messages for a channel at or after a cutoff (milliseconds).
pub async fn messages_from(
    pool: &SqlitePool,
    channel: &str,
    cutoff_ms: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, timestamp, channel, user, content, display_name
        FROM messages
        WHERE channel = ? AND timestamp >= ?
        ORDER BY timestamp
        "#,
    )
    .bind(channel)
    .bind(cutoff_ms)
    .fetch_all(pool)
    .await
}

/// Messages for a channel strictly after a timestamp (milliseconds).
pub async fn messages_after(
    pool: &SqlitePool,
    channel: &str,
    since_ms: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, timestamp, channel, user, content, display_name
        FROM messages
        WHERE channel = ? AND timestamp > ?
        ORDER BY timestamp
        "#,
    )
    .bind(channel)
    .bind(since_ms)
    .fetch_all(pool)
    .await
}

/// Insert one message, returning the affected row count.
pub async fn insert_message(pool: &SqlitePool, message: &NewMessage) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO messages (timestamp, channel, user, content, display_name)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.timestamp)
    .bind(&message.channel)
    .bind(&message.user)
    .bind(&message.content)
    .bind(&message.display_name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
