/**
 * Static Key Guard
 *
 * The ingest endpoints (clip insert/remove, message insert) are called by
 * trusted bots, not by logged-in users. They authenticate with a shared
 * key carried verbatim in the Authorization header.
 *
 * Status codes follow the ingest contract: 403 when no credentials were
 * sent at all, 401 when they were sent but are wrong. An endpoint whose
 * key is not configured fails closed with 403.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::ApiError;

/// Require the Authorization header to equal a configured static key.
pub fn require_static_key(headers: &HeaderMap, expected: Option<&str>) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Err(ApiError::forbidden("endpoint is not configured"));
    };

    let provided = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::forbidden("no credentials sent"))?;

    if provided != expected {
        return Err(ApiError::InvalidKey);
    }

    Ok(())
}
