/**
 * User Model and Database Operations
 *
 * This module holds the user row type and the parameterized queries that
 * touch the users table. Nothing here caches rows across calls; the store
 * is the single source of truth.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User row as persisted in the store.
///
/// `password_hash` is an opaque salted bcrypt digest and must never be
/// serialized into a response; the handlers expose [`UserResponse`]
/// instead.
///
/// [`UserResponse`]: crate::auth::handlers::types::UserResponse
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Store-assigned unique id
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Salted bcrypt digest of the password
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new user row.
///
/// Username uniqueness is enforced by the store's UNIQUE constraint; a
/// violation surfaces as a database error for the caller to translate.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?, ?, ?)
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Look up a user by username.
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
