/**
 * API Error Types
 *
 * This module defines the tagged error type used across the auth core and
 * the HTTP handlers. Each variant maps to exactly one HTTP status code and
 * one stable machine-readable kind.
 *
 * # Error Categories
 *
 * - Caller-fixable input problems (400, 422)
 * - Authentication failures (401), deliberately low-information so that
 *   "unknown username" and "wrong password" are indistinguishable
 * - Missing credentials on ingest endpoints (403)
 * - Conflicts with existing rows (409)
 * - Missing rows (404)
 * - Upstream service failures (502)
 * - Store and internal failures (500), logged server-side only
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error type shared by the auth core and all route handlers.
///
/// The `Display` implementation is for internal logging; the
/// client-facing message comes from [`ApiError::message`], which never
/// leaks driver or upstream details.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty request fields.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Login failed. Covers both "unknown username" and "wrong password"
    /// with a single kind and message.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// A bearer token that resolves to no user (or to more than one row,
    /// which the store's unique digest column should make impossible).
    #[error("invalid authorization token")]
    Unauthenticated,

    /// The Authorization header is missing or not `Bearer <token>`.
    #[error("malformed authorization header: {message}")]
    MalformedHeader { message: String },

    /// A static ingest key or wiki password did not match.
    #[error("wrong credentials")]
    InvalidKey,

    /// No credentials sent to an endpoint guarded by a static key.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    /// The row addressed by the request does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Insert would violate a uniqueness invariant.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// A parameter is well-formed JSON/text but semantically unusable
    /// (bad clip URL, bad date).
    #[error("unprocessable: {message}")]
    Unprocessable { message: String },

    /// A third-party service (the Twitch Helix API) failed or returned
    /// an unusable payload. Details are logged, not returned.
    #[error("upstream error: {message}")]
    Upstream { message: String },

    /// Store failure. The driver error is logged server-side and the
    /// client sees a generic message.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Non-store internal failure (password hashing, task plumbing).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader { message: message.into() }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable { message: message.into() }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::Unauthenticated
            | Self::MalformedHeader { .. }
            | Self::InvalidKey => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Store(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind for the JSON error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthenticated => "unauthenticated",
            Self::MalformedHeader { .. } => "malformed_header",
            Self::InvalidKey => "invalid_key",
            Self::Forbidden { .. } => "forbidden",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Upstream { .. } => "upstream_error",
            Self::Store(_) => "store_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Client-facing message. Store, upstream, and internal failures get
    /// a fixed generic message; their details only go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message }
            | Self::MalformedHeader { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Unprocessable { message } => message.clone(),
            Self::InvalidCredentials => "invalid username or password".to_string(),
            Self::Unauthenticated => "invalid authorization token".to_string(),
            Self::InvalidKey => "wrong credentials".to_string(),
            Self::Upstream { .. } => "upstream service error".to_string(),
            Self::Store(_) | Self::Internal { .. } => "something went wrong".to_string(),
        }
    }
}
