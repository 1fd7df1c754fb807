use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fundlink_server::{api::app_router, build_state, config::Config};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn send_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn posts_and_events_round_trip() {
    let tmp = tempdir().unwrap();
    std::env::set_var("FL_DATA_DIR", tmp.path().join("data"));
    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let (status, post) = send_json(
        &app,
        "/api/v1/posts",
        json!({"author": "alice", "body": "hello world"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post_id = post["id"].as_str().unwrap().to_string();

    // Likes toggle and stay deduplicated
    let (status, liked) = send_json(
        &app,
        &format!("/api/v1/posts/{}/like", post_id),
        json!({"account": "bob"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likes"], json!(["bob"]));

    let (_, unliked) = send_json(
        &app,
        &format!("/api/v1/posts/{}/like", post_id),
        json!({"account": "bob"}),
    )
    .await;
    assert_eq!(unliked["likes"], json!([]));

    let (status, commented) = send_json(
        &app,
        &format!("/api/v1/posts/{}/comments", post_id),
        json!({"author": "bob", "body": "nice"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(commented["comments"].as_array().unwrap().len(), 1);

    let (status, _) = send_json(
        &app,
        "/api/v1/posts/missing/comments",
        json!({"author": "bob", "body": "nice"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, event) = send_json(
        &app,
        "/api/v1/events",
        json!({
            "organizer": "alice",
            "name": "demo day",
            "startsAt": "2026-09-01T18:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let event_id = event["id"].as_str().unwrap().to_string();

    // RSVPs are deduplicated per account
    let (_, joined) = send_json(
        &app,
        &format!("/api/v1/events/{}/rsvp", event_id),
        json!({"account": "bob"}),
    )
    .await;
    assert_eq!(joined["attendees"], json!(["bob"]));
    let (_, joined_again) = send_json(
        &app,
        &format!("/api/v1/events/{}/rsvp", event_id),
        json!({"account": "bob"}),
    )
    .await;
    assert_eq!(joined_again["attendees"], json!(["bob"]));
}
