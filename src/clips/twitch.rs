/**
 * Twitch Helix Client
 *
 * Fetches clip metadata from the Helix clips endpoint. The only caller
 * is the clip ingest handler; everything the store needs about a clip
 * comes from this one request.
 *
 * Upstream failures never leak response bodies or driver details to the
 * client; they are logged here and surfaced as a generic upstream error.
 */

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;

use crate::error::ApiError;
use crate::server::config::Config;

/// Clip link shapes accepted for ingest: clips.twitch.tv short links and
/// www.twitch.tv/<channel>/clip/<slug> links, with or without scheme.
static CLIP_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:clips|www)\.twitch\.tv/)(?:(?:[a-zA-Z0-9]\w{2,24})/clip/)?([a-zA-Z0-9_-]+)\S*$",
    )
    .unwrap()
});

/// Extract the clip slug from a Twitch clip URL.
pub fn parse_clip_slug(url: &str) -> Option<&str> {
    CLIP_URL_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Clip metadata as returned by the Helix clips endpoint. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HelixClip {
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub title: String,
    pub broadcaster_name: String,
    pub creator_name: String,
}

#[derive(Debug, Deserialize)]
struct HelixResponse {
    data: Vec<HelixClip>,
}

/// Minimal Helix API client.
#[derive(Clone)]
pub struct TwitchClient {
    http: reqwest::Client,
    api_url: String,
    client_id: Option<String>,
    oauth_token: Option<String>,
}

impl TwitchClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.twitch_api_url.clone(),
            client_id: config.twitch_client_id.clone(),
            oauth_token: config.twitch_oauth_token.clone(),
        }
    }

    /// Fetch metadata for a clip slug.
    ///
    /// # Errors
    ///
    /// * `Upstream` - credentials not configured, request failed, non-2xx
    ///   status, or an undecodable/incomplete payload
    /// * `NotFound` - Helix knows no clip under this slug
    pub async fn fetch_clip(&self, slug: &str) -> Result<HelixClip, ApiError> {
        let (Some(client_id), Some(oauth_token)) = (&self.client_id, &self.oauth_token) else {
            return Err(ApiError::upstream("twitch credentials not configured"));
        };

        let response = self
            .http
            .get(format!("{}/clips", self.api_url))
            .query(&[("id", slug)])
            .header("Client-Id", client_id)
            .header(reqwest::header::AUTHORIZATION, oauth_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(slug, error = %e, "helix request failed");
                ApiError::upstream("helix request failed")
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(slug, %status, "helix returned an error status");
            return Err(ApiError::upstream(format!("helix returned {status}")));
        }

        let body: HelixResponse = response.json().await.map_err(|e| {
            tracing::error!(slug, error = %e, "helix payload could not be decoded");
            ApiError::upstream("helix payload could not be decoded")
        })?;

        let clip = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found("clip not found"))?;

        if clip.url.is_empty() || clip.broadcaster_name.is_empty() || clip.creator_name.is_empty() {
            tracing::error!(slug, "helix payload is missing required fields");
            return Err(ApiError::upstream("helix payload is missing required fields"));
        }

        Ok(clip)
    }
}
