/**
 * Auth Core
 *
 * Orchestrates registration, login, token issuance, token validation, and
 * revocation over the injected store handle. Holds no state of its own:
 * every operation re-reads from the store, so correctness under
 * concurrent requests reduces to the store's transactional guarantees.
 *
 * # Token Lifecycle
 *
 * ISSUED -> validated any number of times -> REVOKED
 *
 * There is no expiry: a token stays valid until it is revoked.
 *
 * # Security
 *
 * - Passwords are bcrypt-hashed with a fresh salt per call
 * - "Unknown username" and "wrong password" produce one identical error
 * - A malformed stored digest fails verification, it never panics
 */

use bcrypt::DEFAULT_COST;
use sqlx::SqlitePool;

use crate::auth::tokens;
use crate::auth::users::{self, User};
use crate::error::ApiError;

/// Register a new user and log them in.
///
/// The username uniqueness pre-check keeps the common case friendly; the
/// store's UNIQUE constraint is the actual source of truth, and a
/// violation from a racing insert is translated to the same conflict
/// error. Token issuance is delegated to [`login`] with the just-created
/// credentials so that register and login share exactly one issuance
/// code path. If issuance fails after the insert, the user row remains.
///
/// # Errors
///
/// - `InvalidInput` when either field is empty
/// - `Conflict` when the username is taken
/// - `Store` on persistence failure
pub async fn register(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::invalid_input("username and password must be provided"));
    }

    if users::get_user_by_username(pool, username).await?.is_some() {
        return Err(ApiError::conflict("username already exists"));
    }

    let password_hash = bcrypt::hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        ApiError::internal("password hashing failed")
    })?;

    if let Err(e) = users::create_user(pool, username, &password_hash).await {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            return Err(ApiError::conflict("username already exists"));
        }
        return Err(e.into());
    }

    tracing::info!(username, "user registered");

    login(pool, username, password).await
}

/// Verify credentials and issue a fresh bearer token.
///
/// Both failure modes reject with the single `InvalidCredentials` error,
/// so a caller cannot learn whether the username exists.
pub async fn login(pool: &SqlitePool, username: &str, password: &str) -> Result<String, ApiError> {
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::invalid_input("username and password must be provided"));
    }

    let user = users::get_user_by_username(pool, username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !bcrypt::verify(password, &user.password_hash).unwrap_or(false) {
        return Err(ApiError::InvalidCredentials);
    }

    issue_token(pool, user.id).await
}

/// Resolve a raw bearer token to its user.
///
/// Fails unless exactly one joined row matches the digest. More than one
/// match should be structurally impossible given the unique digest
/// column, but is treated as a failure rather than assumed away. Never
/// mutates token state.
pub async fn validate_token(pool: &SqlitePool, raw_token: &str) -> Result<User, ApiError> {
    let digest = tokens::digest_of(raw_token);
    let mut matches = tokens::users_matching_digest(pool, &digest)
        .await?
        .into_iter();

    match (matches.next(), matches.next()) {
        (Some(user), None) => Ok(user),
        _ => Err(ApiError::Unauthenticated),
    }
}

/// Revoke a raw bearer token.
///
/// Deleting is atomic at the store level; revoking the same token a
/// second time yields `NotFound`, which logout callers treat as
/// non-fatal 401 rather than a crash.
pub async fn revoke_token(pool: &SqlitePool, raw_token: &str) -> Result<(), ApiError> {
    let digest = tokens::digest_of(raw_token);

    if tokens::delete_token(pool, &digest).await? != 1 {
        return Err(ApiError::not_found("token not found"));
    }

    Ok(())
}

/// Issue and persist a token for a user id.
///
/// Re-validates that the user row still exists, defending against a race
/// where the row was deleted between the caller's lookup and this call.
async fn issue_token(pool: &SqlitePool, user_id: i64) -> Result<String, ApiError> {
    if users::get_user_by_id(pool, user_id).await?.is_none() {
        return Err(ApiError::not_found("user not found"));
    }

    let issued = tokens::issue();
    tokens::store_token(pool, user_id, &issued.digest).await?;

    Ok(issued.raw)
}
