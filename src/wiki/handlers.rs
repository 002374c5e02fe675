/**
 * Wiki Route Handlers
 *
 * Reading is public. Creating a page is guarded by the shared wiki
 * password carried in the request body, matching how the community
 * edits its wiki: one secret, no per-user permissions.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::wiki::db::{self, WikiPage};

/// Page creation request
#[derive(Deserialize, Debug)]
pub struct CreatePageRequest {
    pub password: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// List all page titles.
pub async fn list_pages(State(pool): State<SqlitePool>) -> Result<Json<Vec<String>>, ApiError> {
    let titles = db::list_titles(&pool).await?;

    Ok(Json(titles))
}

/// Fetch one page by title.
pub async fn get_page(
    State(pool): State<SqlitePool>,
    Path(title): Path<String>,
) -> Result<Json<WikiPage>, ApiError> {
    let page = db::get_page(&pool, &title)
        .await?
        .ok_or_else(|| ApiError::not_found("wiki page not found"))?;

    Ok(Json(page))
}

/// Create a page.
///
/// # Errors
///
/// * `400 Bad Request` - missing password, title, or content
/// * `401 Unauthorized` - wrong wiki password
/// * `403 Forbidden` - wiki editing not configured
/// * `409 Conflict` - a page with this title exists
/// * `500 Internal Server Error` - store failure
pub async fn create_page(
    State(state): State<AppState>,
    Json(request): Json<CreatePageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let missing = || ApiError::invalid_input("missing required parameters");
    let password = request.password.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let title = request.title.filter(|v| !v.is_empty()).ok_or_else(missing)?;
    let content = request.content.filter(|v| !v.is_empty()).ok_or_else(missing)?;

    let Some(expected) = state.config.wiki_password.as_deref() else {
        return Err(ApiError::forbidden("wiki editing is not configured"));
    };
    if password != expected {
        return Err(ApiError::InvalidKey);
    }

    let title = title.trim();
    if db::page_exists(&state.pool, title).await? {
        return Err(ApiError::conflict("wiki page already exists"));
    }

    db::create_page(&state.pool, title, &content).await?;
    tracing::info!(title, "wiki page created");

    Ok(Json(serde_json::json!({ "ok": true })))
}
