//! Shared test fixtures.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory store with migrations applied.
///
/// A single-connection pool that never recycles its connection, so the
/// in-memory database lives for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
