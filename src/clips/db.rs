/**
 * Database Operations for Clips
 *
 * Clips are stored with their Helix metadata plus an aggregate row
 * (view counter and submitting author). Removal takes both rows down in
 * one transaction.
 */

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

/// Clip row as persisted and served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Clip {
    pub id: i64,
    /// Broadcast-local calendar date the clip was created on
    pub created_at: NaiveDate,
    pub url: String,
    pub title: String,
    pub channel: String,
    pub creator_name: String,
}

/// Fields for a clip about to be inserted.
#[derive(Debug)]
pub struct NewClip {
    pub created_at: NaiveDate,
    pub url: String,
    pub title: String,
    pub channel: String,
    pub creator_name: String,
}

/// Insert a clip row and return its id.
pub async fn insert_clip(pool: &SqlitePool, clip: &NewClip) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO clips (created_at, url, title, channel, creator_name)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(clip.created_at)
    .bind(&clip.url)
    .bind(&clip.title)
    .bind(&clip.channel)
    .bind(&clip.creator_name)
    .fetch_one(pool)
    .await
}

/// Insert the aggregate row for a clip.
pub async fn insert_aggregate(
    pool: &SqlitePool,
    clip_id: i64,
    author: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO clips_aggregate (id, views, author) VALUES (?, 0, ?)")
        .bind(clip_id)
        .bind(author)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a clip and its aggregate row by canonical URL.
///
/// Returns the number of clips removed (0 or 1). Both rows go in one
/// transaction so a failure cannot leave an orphaned aggregate.
pub async fn delete_by_url(pool: &SqlitePool, url: &str) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM clips WHERE url = ?")
        .bind(url)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(id) = id else {
        return Ok(0);
    };

    sqlx::query("DELETE FROM clips_aggregate WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM clips WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(1)
}

/// All clips created on a calendar date.
pub async fn clips_on(pool: &SqlitePool, date: NaiveDate) -> Result<Vec<Clip>, sqlx::Error> {
    sqlx::query_as::<_, Clip>(
        r#"
        SELECT id, created_at, url, title, channel, creator_name
        FROM clips
        WHERE created_at = ?
        ORDER BY id
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await
}
