/**
 * Bearer Token Codec and Token Store Operations
 *
 * Tokens are opaque random values. The store only ever sees a one-way
 * digest of a token: the digest is the lookup key for validation and the
 * delete key for revocation, so a compromised store does not yield usable
 * credentials.
 *
 * # Format
 *
 * - raw token:  base64(SHA-256(32 random bytes)) - 44 characters
 * - digest:     base64(SHA-256(raw token))       - 44 characters
 *
 * The raw token is returned to the caller exactly once, at issuance, and
 * is never persisted or logged.
 */

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::auth::users::User;

/// Entropy fed into each new token, in bytes.
const TOKEN_ENTROPY_BYTES: usize = 32;

/// A freshly issued token: the raw value handed to the client once, and
/// the digest that goes into the store.
pub struct IssuedToken {
    pub raw: String,
    pub digest: String,
}

/// Generate a new bearer token from CSPRNG entropy.
pub fn issue() -> IssuedToken {
    let mut entropy = [0u8; TOKEN_ENTROPY_BYTES];
    rand::thread_rng().fill(&mut entropy[..]);

    let raw = BASE64.encode(Sha256::digest(entropy));
    let digest = digest_of(&raw);

    IssuedToken { raw, digest }
}

/// Deterministic one-way digest of a client-presented token.
pub fn digest_of(raw_token: &str) -> String {
    BASE64.encode(Sha256::digest(raw_token.as_bytes()))
}

/// Persist a token digest for a user.
pub async fn store_token(
    pool: &SqlitePool,
    user_id: i64,
    digest: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO auth_tokens (user_id, token) VALUES (?, ?)")
        .bind(user_id)
        .bind(digest)
        .execute(pool)
        .await?;

    Ok(())
}

/// All users joined to a token digest.
///
/// The UNIQUE constraint on the digest column should make more than one
/// row impossible; the caller still checks for exactly one rather than
/// assuming it.
pub async fn users_matching_digest(
    pool: &SqlitePool,
    digest: &str,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT users.id, users.username, users.password_hash, users.created_at
        FROM users
        JOIN auth_tokens ON auth_tokens.user_id = users.id
        WHERE auth_tokens.token = ?
        "#,
    )
    .bind(digest)
    .fetch_all(pool)
    .await
}

/// Delete the token row for a digest, returning how many rows went away.
pub async fn delete_token(pool: &SqlitePool, digest: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM auth_tokens WHERE token = ?")
        .bind(digest)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
