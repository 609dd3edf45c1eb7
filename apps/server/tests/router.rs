use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use folio::domain::config::ApiConfig;
use folio_server::Server;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app_with(config: ApiConfig) -> Router {
    Server::builder().config(config).build().await.expect("server").router()
}

async fn app() -> Router {
    app_with(ApiConfig::default()).await
}

async fn raw(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, headers, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = raw(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn health_reports_up_without_caching() {
    let app = app().await;
    let (status, headers, bytes) =
        raw(&app, Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CACHE_CONTROL].to_str().unwrap().contains("no-cache"));
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "up");
    assert!(body["uptime"].is_u64());
}

#[tokio::test]
async fn startup_seeds_the_bundled_portfolio() {
    let app = app().await;
    let (status, body) = get_json(&app, "/api/portfolio").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["about"]["name"], "Kalpick Sharma");
}

#[tokio::test]
async fn seeding_can_be_disabled() {
    let mut config = ApiConfig::default();
    config.content.seed_on_startup = false;
    let app = app_with(config).await;

    let (status, body) = get_json(&app, "/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn every_slice_is_mounted() {
    let app = app().await;

    let request = Request::post("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.9")
        .body(Body::from(
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "Interested in a collaboration",
            })
            .to_string(),
        ))
        .unwrap();
    let (status, _, _) = raw(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::post("/api/analytics/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "command": "about" }).to_string()))
        .unwrap();
    let (status, _, _) = raw(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&app, "/api/analytics/commands").await;
    assert_eq!(body["data"][0]["command"], "about");

    let (_, body) = get_json(&app, "/api/contact").await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn api_docs_are_served() {
    let app = app().await;
    let (status, headers, _) =
        raw(&app, Request::get("/api-docs").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = app().await;
    let request = Request::get("/health")
        .header(header::ORIGIN, "https://portfolio.example")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = raw(&app, request).await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn cors_echoes_configured_origins_only() {
    let mut config = ApiConfig::default();
    config.server.cors_origins = vec!["https://portfolio.example".to_owned()];
    let app = app_with(config).await;

    let allowed = Request::get("/health")
        .header(header::ORIGIN, "https://portfolio.example")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = raw(&app, allowed).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://portfolio.example");

    let other = Request::get("/health")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = raw(&app, other).await;
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
