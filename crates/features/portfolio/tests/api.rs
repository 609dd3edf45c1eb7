use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use folio_database::Database;
use folio_domain::config::ApiConfig;
use folio_kernel::server::ApiState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app(seed: bool) -> Router {
    let mut config = ApiConfig::default();
    config.content.seed_on_startup = seed;

    let database = Database::builder()
        .url("mem://")
        .session("test", "portfolio")
        .migrations(folio_portfolio::MIGRATIONS.iter().copied())
        .init()
        .await
        .expect("database");
    let slice = folio_portfolio::init(&config, &database).await.expect("slice");
    let state =
        ApiState::builder().config(config).db(database).register_slice(slice).build().unwrap();

    let (router, _) = folio_portfolio::router().split_for_parts();
    router.with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn put(uri: &str, body: &Value) -> Request<Body> {
    Request::put(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn seeded_portfolio_lists_every_section_by_kind() {
    let app = app(true).await;

    let (status, body) = send(&app, get("/api/portfolio")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let kinds: Vec<&str> = body["data"].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        kinds,
        [
            "about",
            "certifications",
            "contact",
            "education",
            "experience",
            "links",
            "projects",
            "skills",
            "volunteering"
        ]
    );
    assert_eq!(body["data"]["about"]["name"], "Kalpick Sharma");
}

#[tokio::test]
async fn seeding_twice_keeps_existing_versions() {
    let mut config = ApiConfig::default();
    config.content.seed_on_startup = true;
    let database = Database::builder()
        .url("mem://")
        .session("test", "portfolio")
        .migrations(folio_portfolio::MIGRATIONS.iter().copied())
        .init()
        .await
        .unwrap();

    folio_portfolio::init(&config, &database).await.unwrap();
    let store = folio_portfolio::SectionStore::new(database.clone());
    store.upsert("about".parse().unwrap(), &json!({ "name": "Edited" })).await.unwrap();
    folio_portfolio::init(&config, &database).await.unwrap();

    let about = store.get("about".parse().unwrap()).await.unwrap().unwrap();
    assert_eq!(about.version, 2);
    assert_eq!(about.content, json!({ "name": "Edited" }));
}

#[tokio::test]
async fn put_then_get_round_trips_and_counts_versions() {
    let app = app(false).await;
    let payload = json!({ "design": ["Figma"], "development": [], "concepts": [], "frameworks": [] });

    let (status, body) = send(&app, put("/api/portfolio/skills", &json!({ "content": payload }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Portfolio section 'skills' updated successfully");
    assert_eq!(body["data"]["kind"], "skills");
    assert_eq!(body["data"]["version"], 1);
    assert!(body["data"]["updatedAt"].is_string());

    let (_, body) = send(&app, put("/api/portfolio/skills", &json!({ "content": payload }))).await;
    assert_eq!(body["data"]["version"], 2);

    let (status, body) = send(&app, get("/api/portfolio/skills")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], payload);
}

#[tokio::test]
async fn missing_sections_are_not_found() {
    let app = app(false).await;

    let (status, body) = send(&app, get("/api/portfolio/about")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Portfolio section 'about' not found" }));

    let (status, body) = send(&app, get("/api/portfolio/resume")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Portfolio section 'resume' not found");
}

#[tokio::test]
async fn writes_without_content_are_rejected_and_leave_the_section_untouched() {
    let app = app(false).await;
    send(&app, put("/api/portfolio/links", &json!({ "content": [] }))).await;

    for body in [json!({}), json!({ "content": null })] {
        let (status, response) = send(&app, put("/api/portfolio/links", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "success": false, "message": "Content is required" }));
    }

    let (_, body) = send(&app, get("/api/portfolio/links")).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_kinds_cannot_be_written() {
    let app = app(false).await;

    let (status, body) = send(&app, put("/api/portfolio/resume", &json!({ "content": {} }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = send(&app, get("/api/portfolio")).await;
    assert_eq!(body["data"], json!({}));
}
