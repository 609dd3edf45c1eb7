use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use folio_database::Database;
use folio_domain::config::ApiConfig;
use folio_kernel::server::ApiState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let database = Database::builder()
        .url("mem://")
        .session("test", "analytics")
        .migrations(folio_analytics::MIGRATIONS.iter().copied())
        .init()
        .await
        .expect("database");
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(folio_analytics::init(&database))
        .db(database)
        .build()
        .unwrap();

    let (router, _) = folio_analytics::router().split_for_parts();
    router.with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

async fn track(app: &Router, command: &str) -> (StatusCode, Value) {
    let request = Request::post("/api/analytics/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "command": command }).to_string()))
        .unwrap();
    send(app, request).await
}

async fn usage(app: &Router) -> Value {
    let (status, body) =
        send(app, Request::get("/api/analytics/commands").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

#[tokio::test]
async fn tracking_counts_normalized_commands() {
    let app = app().await;

    let (status, body) = track(&app, "  Skills ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Command tracked" }));
    track(&app, "skills").await;

    let data = usage(&app).await;
    assert_eq!(data.as_array().unwrap().len(), 1);
    assert_eq!(data[0]["command"], "skills");
    assert_eq!(data[0]["count"], 2);
    assert!(data[0]["lastUsedAt"].is_string());
}

#[tokio::test]
async fn counters_are_ordered_by_count_then_name() {
    let app = app().await;
    for command in ["projects", "about", "about", "links", "info", "info"] {
        track(&app, command).await;
    }

    let commands: Vec<(String, i64)> = usage(&app)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| (entry["command"].as_str().unwrap().to_owned(), entry["count"].as_i64().unwrap()))
        .collect();

    assert_eq!(
        commands,
        [
            ("about".to_owned(), 2),
            ("info".to_owned(), 2),
            ("links".to_owned(), 1),
            ("projects".to_owned(), 1),
        ]
    );
}

#[tokio::test]
async fn blank_and_oversized_commands_are_rejected() {
    let app = app().await;

    let (status, body) = track(&app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Command is required");

    let (status, body) = track(&app, &"x".repeat(101)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Command must be at most 100 characters");

    let request = Request::post("/api/analytics/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(usage(&app).await, json!([]));
}
