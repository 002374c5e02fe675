//! Content API tests
//!
//! End-to-end coverage of the wiki, clip, and chat message routes,
//! with the Helix API mocked by wiremock.

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_v1_index() {
    let app = test_app().await;

    let response = app.oneshot(request("GET", "/v1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"api v1");
}

// ---------------------------------------------------------------------------
// Wiki
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_wiki_create_and_fetch() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/wiki/create",
            serde_json::json!({
                "password": WIKI_PASSWORD,
                "title": " Rules ",
                "content": "be nice"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The title was trimmed before insert.
    let response = app
        .clone()
        .oneshot(request("GET", "/v1/wiki/pages"))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body, serde_json::json!(["Rules"]));

    let response = app
        .clone()
        .oneshot(request("GET", "/v1/wiki/page/Rules"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["content"], "be nice");

    let response = app
        .oneshot(request("GET", "/v1/wiki/page/Missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wiki_create_guards() {
    let app = test_app().await;

    // Missing fields -> 400.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/wiki/create",
            serde_json::json!({"password": WIKI_PASSWORD, "title": "Rules"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Wrong password -> 401.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/wiki/create",
            serde_json::json!({"password": "nope", "title": "Rules", "content": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Duplicate title -> 409.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/wiki/create",
                serde_json::json!({"password": WIKI_PASSWORD, "title": "Rules", "content": "x"}),
            ))
            .await
            .unwrap();
        if response.status() != StatusCode::OK {
            assert_eq!(response.status(), StatusCode::CONFLICT);
        }
    }
}

// ---------------------------------------------------------------------------
// Chat messages
// ---------------------------------------------------------------------------

fn message_body(timestamp: i64) -> serde_json::Value {
    serde_json::json!({
        "timestamp": timestamp,
        "channel": "#somechannel",
        "user": "viewer",
        "content": "hello chat",
        "display_name": "Viewer"
    })
}

#[tokio::test]
async fn test_message_ingest_requires_key() {
    let app = test_app().await;
    let now = chrono::Utc::now().timestamp();

    // No credentials -> 403.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/twitch/insertMessage",
            message_body(now),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Wrong credentials -> 401.
    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/v1/twitch/insertMessage",
            "wrong-key",
            message_body(now),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_message_ingest_and_listing() {
    let app = test_app().await;
    let now = chrono::Utc::now().timestamp();

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/v1/twitch/insertMessage",
            API_KEY,
            message_body(now),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, serde_json::json!("Inserted 1 rows."));

    // The channel path parameter arrives without '#' and in any case.
    let response = app
        .clone()
        .oneshot(request("GET", "/v1/twitch/messages/SomeChannel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["channel"], "#somechannel");
    assert_eq!(messages[0]["user"], "viewer");
    // Stored and served in milliseconds.
    assert_eq!(messages[0]["timestamp"], now * 1_000);

    // Missing fields -> 400.
    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/v1/twitch/insertMessage",
            API_KEY,
            serde_json::json!({"timestamp": now, "channel": "#somechannel"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_messages_since_filters() {
    let app = test_app().await;
    let now = chrono::Utc::now().timestamp();

    for ts in [now - 10, now - 5] {
        let response = app
            .clone()
            .oneshot(authed_json_request(
                "POST",
                "/v1/twitch/insertMessage",
                API_KEY,
                message_body(ts),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let since_ms = (now - 7) * 1_000;
    let response = app
        .oneshot(request(
            "GET",
            &format!("/v1/twitch/messages/somechannel/since/{since_ms}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["timestamp"], (now - 5) * 1_000);
}

// ---------------------------------------------------------------------------
// Clips
// ---------------------------------------------------------------------------

fn helix_clip_payload() -> serde_json::Value {
    serde_json::json!({
        "data": [{
            "created_at": "2024-05-01T18:00:00Z",
            "url": "https://clips.twitch.tv/TestSlug",
            "title": "great moment",
            "broadcaster_name": "somechannel",
            "creator_name": "clipper"
        }]
    })
}

async fn helix_mock() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clips"))
        .and(query_param("id", "TestSlug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helix_clip_payload()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_clip_ingest_requires_key() {
    let app = test_app().await;
    let body = serde_json::json!({"url": "https://clips.twitch.tv/TestSlug"});

    let response = app
        .clone()
        .oneshot(json_request("POST", "/v1/insertClip", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(authed_json_request("POST", "/v1/insertClip", "wrong-key", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_clip_ingest_rejects_bad_urls() {
    let app = test_app().await;

    // Missing url -> 400.
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/v1/insertClip",
            CLIP_KEY,
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Not a clip link -> 422, and Helix is never contacted.
    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/v1/insertClip",
            CLIP_KEY,
            serde_json::json!({"url": "https://example.com/not-a-clip"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_clip_ingest_and_listing() {
    let helix = helix_mock().await;
    let app = test_app_with_twitch(&helix.uri()).await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/v1/insertClip",
            CLIP_KEY,
            serde_json::json!({
                "url": "https://clips.twitch.tv/TestSlug",
                "author": "submitter"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body, serde_json::json!("Inserted clip: https://clips.twitch.tv/TestSlug"));

    // 18:00 UTC on 2024-05-01 is still 2024-05-01 in Europe/Berlin.
    let response = app
        .clone()
        .oneshot(request("GET", "/v1/clips/2024-05-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let clips = body.as_array().unwrap();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0]["title"], "great moment");
    assert_eq!(clips[0]["channel"], "somechannel");

    // Other dates are empty.
    let response = app
        .clone()
        .oneshot(request("GET", "/v1/clips/2024-05-02"))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Bad date parameter -> 422.
    let response = app
        .oneshot(request("GET", "/v1/clips/not-a-date"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_clip_removal() {
    let helix = helix_mock().await;
    let app = test_app_with_twitch(&helix.uri()).await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/v1/insertClip",
            CLIP_KEY,
            serde_json::json!({"url": "https://clips.twitch.tv/TestSlug"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Removal accepts any link shape that resolves to the same slug.
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "DELETE",
            "/v1/removeClip",
            CLIP_KEY,
            serde_json::json!({"url": "https://www.twitch.tv/somechannel/clip/TestSlug"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request("GET", "/v1/clips/2024-05-01"))
        .await
        .unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Removing it again -> 404.
    let response = app
        .oneshot(authed_json_request(
            "DELETE",
            "/v1/removeClip",
            CLIP_KEY,
            serde_json::json!({"url": "https://clips.twitch.tv/TestSlug"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
