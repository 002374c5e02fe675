/**
 * Content Routes (v1)
 *
 * Wiki pages, clips, and the chat message archive, mounted under `/v1`.
 *
 * # Routes
 *
 * - `GET    /v1`                 - index banner
 * - `GET    /v1/wiki/pages`      - list wiki page titles
 * - `GET    /v1/wiki/page/{title}` - fetch one wiki page
 * - `POST   /v1/wiki/create`     - create a wiki page (password in body)
 * - `POST   /v1/insertClip`      - ingest a clip (clip key)
 * - `DELETE /v1/removeClip`      - remove a clip (clip key)
 * - `GET    /v1/clips/{date}`    - clips for a date ("today" allowed)
 * - `GET    /v1/twitch`          - index banner
 * - `GET    /v1/twitch/messages/{channel_name}` - last 3 days
 * - `GET    /v1/twitch/messages/{channel_name}/since/{timestamp}`
 * - `POST   /v1/twitch/insertMessage` - archive a message (API key)
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::clips::handlers as clip_handlers;
use crate::messages::handlers as message_handlers;
use crate::server::state::AppState;
use crate::wiki::handlers as wiki_handlers;

async fn api_index() -> &'static str {
    "api v1"
}

async fn twitch_index() -> &'static str {
    "twitch api v1"
}

/// Configure the v1 content routes.
pub fn configure_content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_index))
        .route("/wiki/pages", get(wiki_handlers::list_pages))
        .route("/wiki/page/{title}", get(wiki_handlers::get_page))
        .route("/wiki/create", post(wiki_handlers::create_page))
        .route("/insertClip", post(clip_handlers::insert_clip))
        .route("/removeClip", delete(clip_handlers::remove_clip))
        .route("/clips/{date}", get(clip_handlers::clips_by_date))
        .route("/twitch", get(twitch_index))
        .route(
            "/twitch/messages/{channel_name}",
            get(message_handlers::recent_messages),
        )
        .route(
            "/twitch/messages/{channel_name}/since/{timestamp}",
            get(message_handlers::messages_since),
        )
        .route("/twitch/insertMessage", post(message_handlers::insert_message))
}
