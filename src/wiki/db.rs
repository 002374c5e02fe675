/**
 * Database Operations for Wiki Pages
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Wiki page row as persisted and served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WikiPage {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// All page titles.
pub async fn list_titles(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT title FROM wiki_pages ORDER BY title")
        .fetch_all(pool)
        .await
}

/// Look up a page by title.
pub async fn get_page(pool: &SqlitePool, title: &str) -> Result<Option<WikiPage>, sqlx::Error> {
    sqlx::query_as::<_, WikiPage>(
        r#"
        SELECT id, title, content, created_at
        FROM wiki_pages
        WHERE title = ?
        "#,
    )
    .bind(title)
    .fetch_optional(pool)
    .await
}

/// Whether a page with this title exists.
pub async fn page_exists(pool: &SqlitePool, title: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wiki_pages WHERE title = ?")
        .bind(title)
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Insert a new page.
pub async fn create_page(
    pool: &SqlitePool,
    title: &str,
    content: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO wiki_pages (title, content, created_at) VALUES (?, ?, ?)")
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(())
}
