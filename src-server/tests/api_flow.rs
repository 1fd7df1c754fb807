use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fundlink_server::{api::app_router, build_state, config::Config};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn register_invest_and_chat_flow() {
    let tmp = tempdir().unwrap();
    std::env::set_var("FL_DATA_DIR", tmp.path().join("data"));
    std::env::set_var("FL_UPLOADS_DIR", tmp.path().join("uploads"));
    let seed_path = tmp.path().join("seed.json");
    std::fs::write(
        &seed_path,
        json!([{
            "id": "projectX",
            "name": "Project X",
            "description": "",
            "investedAmount": 0.0,
            "createdAt": "2026-01-01T00:00:00Z"
        }])
        .to_string(),
    )
    .unwrap();
    std::env::set_var("FL_SEED_FILE", &seed_path);

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    // Registration succeeds once and conflicts after
    let (status, profile) = send_json(
        &app,
        "POST",
        "/api/v1/register",
        json!({"email": "alice", "password": "pw", "name": "Alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["balance"], json!(1000.0));
    assert!(profile.get("passwordHash").is_none());

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/register",
        json!({"email": "alice", "password": "other"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Login verifies the stored credential
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/login",
        json!({"email": "alice", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/login",
        json!({"email": "alice", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Profile reads and updates go through the same account record
    let (status, profile) = get_json(&app, "/api/v1/profile/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], json!("Alice"));

    let (status, profile) = send_json(
        &app,
        "PUT",
        "/api/v1/profile/alice",
        json!({"bio": "angel investor"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["bio"], json!("angel investor"));

    let (status, _) = get_json(&app, "/api/v1/profile/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Following needs both accounts to exist
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/profile/ghost/follow",
        json!({"follower": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/register",
        json!({"email": "bob", "password": "pw"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, follower) = send_json(
        &app,
        "POST",
        "/api/v1/profile/bob/follow",
        json!({"follower": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(follower["following"], json!(["bob"]));

    // Projects were seeded from the configured file
    let (status, projects) = get_json(&app, "/api/v1/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(projects.as_array().unwrap().len(), 1);

    // Investing moves value; overdrafts and bad input do not
    let (status, outcome) = send_json(
        &app,
        "POST",
        "/api/v1/ledger/invest",
        json!({"email": "alice", "projectId": "projectX", "amount": "300"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["balance"], json!(700.0));
    assert_eq!(outcome["project"]["investedAmount"], json!(300.0));

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/ledger/invest",
        json!({"email": "alice", "projectId": "projectX", "amount": 800}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/ledger/invest",
        json!({"email": "alice", "projectId": "nope", "amount": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/ledger/invest",
        json!({"email": "alice", "projectId": "projectX", "amount": "abc"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, balance) = get_json(&app, "/api/v1/ledger/balance/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(balance["balance"], json!(700.0));

    // Direct threads resolve to the same id from either side
    let (status, first) = send_json(
        &app,
        "POST",
        "/api/v1/chats/direct",
        json!({"from": "alice", "to": "bob"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send_json(
        &app,
        "POST",
        "/api/v1/chats/direct",
        json!({"from": "bob", "to": "alice"}),
    )
    .await;
    assert_eq!(first["id"], second["id"]);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/chats/direct",
        json!({"from": "alice", "to": "alice"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Sending appends to the resolved thread
    let thread_id = first["id"].as_str().unwrap().to_string();
    let (status, message) = send_json(
        &app,
        "POST",
        &format!("/api/v1/chats/{}/messages", thread_id),
        json!({"sender": "alice", "body": "hey"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["sender"], json!("alice"));

    // A message cannot carry both a body and an attachment
    let (status, _) = send_json(
        &app,
        "POST",
        &format!("/api/v1/chats/{}/messages", thread_id),
        json!({"sender": "alice", "body": "x", "attachment": "/uploads/x.png"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/v1/chats/missing/messages",
        json!({"sender": "alice", "body": "hey"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, threads) = get_json(&app, "/api/v1/chats?participant=alice").await;
    assert_eq!(status, StatusCode::OK);
    let threads = threads.as_array().unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0]["messages"].as_array().unwrap().len(), 1);
}
