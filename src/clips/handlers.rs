/**
 * Clip Route Handlers
 *
 * Clip ingest and removal are called by a trusted bot holding the static
 * clip key. Listing by date is public.
 *
 * # Ingest Flow
 *
 * 1. Static key check (403 missing, 401 wrong)
 * 2. URL validation against the clip-link pattern (400 missing, 422 bad)
 * 3. Metadata fetch from the Helix API
 * 4. Clip row + aggregate row insert, webhook ping
 */

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::Berlin;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::clips::db::{self, Clip, NewClip};
use crate::clips::twitch::parse_clip_slug;
use crate::error::ApiError;
use crate::middleware::require_static_key;
use crate::server::state::AppState;

/// Clip ingest request
#[derive(Deserialize, Debug)]
pub struct InsertClipRequest {
    pub url: Option<String>,
    /// Who submitted the clip; defaults to "unknown"
    pub author: Option<String>,
}

/// Clip removal request
#[derive(Deserialize, Debug)]
pub struct RemoveClipRequest {
    pub url: Option<String>,
}

/// Insert a clip from a Twitch clip URL.
///
/// # Errors
///
/// * `403` / `401` - missing / wrong clip key
/// * `400 Bad Request` - missing url parameter
/// * `422 Unprocessable Entity` - url is not a Twitch clip link
/// * `404 Not Found` - Helix knows no such clip
/// * `502 Bad Gateway` - Helix failure
/// * `500 Internal Server Error` - store failure
pub async fn insert_clip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<InsertClipRequest>,
) -> Result<Json<String>, ApiError> {
    require_static_key(&headers, state.config.clip_key.as_deref())?;

    let url = request
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::invalid_input("missing required url parameter"))?;
    let slug =
        parse_clip_slug(url).ok_or_else(|| ApiError::unprocessable("invalid url parameter"))?;

    let metadata = state.twitch.fetch_clip(slug).await?;

    // Clip titles can be empty on Twitch; fall back to the channel name.
    let title = if metadata.title.is_empty() {
        metadata.broadcaster_name.clone()
    } else {
        metadata.title.clone()
    };

    let clip = NewClip {
        created_at: metadata.created_at.with_timezone(&Berlin).date_naive(),
        url: metadata.url,
        title,
        channel: metadata.broadcaster_name,
        creator_name: metadata.creator_name,
    };

    let clip_id = db::insert_clip(&state.pool, &clip).await?;

    let author = request.author.as_deref().unwrap_or("unknown");
    if let Err(e) = db::insert_aggregate(&state.pool, clip_id, author).await {
        tracing::warn!(clip_id, error = %e, "failed to insert clip aggregate");
    }

    state.notifier.clip_added();
    tracing::info!(clip_id, url = %clip.url, "clip inserted");

    Ok(Json(format!("Inserted clip: {}", clip.url)))
}

/// Remove a clip by URL.
///
/// The presented link is reduced to its slug and rebuilt as the
/// canonical clips.twitch.tv URL before lookup, so every accepted link
/// shape addresses the same row.
pub async fn remove_clip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RemoveClipRequest>,
) -> Result<Json<String>, ApiError> {
    require_static_key(&headers, state.config.clip_key.as_deref())?;

    let url = request
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::invalid_input("missing required url parameter"))?;
    let slug =
        parse_clip_slug(url).ok_or_else(|| ApiError::unprocessable("invalid url parameter"))?;
    let canonical_url = format!("https://clips.twitch.tv/{slug}");

    if db::delete_by_url(&state.pool, &canonical_url).await? == 0 {
        return Err(ApiError::not_found("clip not found"));
    }

    tracing::info!(url = %canonical_url, "clip removed");

    Ok(Json(format!("Deleted clip: {canonical_url}")))
}

/// List clips created on a date.
///
/// `today` resolves in the Europe/Berlin timezone; anything else must be
/// a YYYY-MM-DD calendar date.
pub async fn clips_by_date(
    State(pool): State<SqlitePool>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Clip>>, ApiError> {
    let date = if date.eq_ignore_ascii_case("today") {
        Utc::now().with_timezone(&Berlin).date_naive()
    } else {
        NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
            ApiError::unprocessable("invalid date parameter. Should be: YYYY-MM-DD")
        })?
    };

    let clips = db::clips_on(&pool, date).await?;

    Ok(Json(clips))
}
