use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use folio_contact::model::ContactRequest;
use folio_terminal::{Bridge, BridgeTracker, CommandTracker, DataSource, Session};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::{Duration, Instant};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn bridge(base_url: &str) -> Bridge {
    Bridge::new(base_url, Duration::from_millis(500)).unwrap()
}

fn portfolio(body: Value) -> Router {
    Router::new().route("/api/portfolio", get(move || async move { Json(body) }))
}

#[tokio::test]
async fn loads_remote_content() {
    let url = serve(portfolio(json!({
        "success": true,
        "data": { "about": { "name": "Remote Name" }, "links": [], "extra": 1 }
    })))
    .await;

    let (data, source) = bridge(&url).load().await;
    assert_eq!(source, DataSource::Api);
    assert_eq!(data.about.unwrap().name, "Remote Name");
    assert!(data.projects.is_none());
}

#[tokio::test]
async fn failure_envelopes_fall_back() {
    let url = serve(portfolio(json!({ "success": false, "message": "Internal server error" }))).await;

    let (data, source) = bridge(&url).load().await;
    assert_eq!(source, DataSource::Bundled);
    assert_eq!(data, folio_terminal::bundled());
}

#[tokio::test]
async fn error_statuses_and_bad_bodies_fall_back() {
    let router = Router::new()
        .route(
            "/api/portfolio",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "success": false }))) }),
        );
    let (_, source) = bridge(&serve(router).await).load().await;
    assert_eq!(source, DataSource::Bundled);

    let router = Router::new().route("/api/portfolio", get(|| async { "<html>not json</html>" }));
    let (_, source) = bridge(&serve(router).await).load().await;
    assert_eq!(source, DataSource::Bundled);
}

#[tokio::test]
async fn slow_backends_are_abandoned_at_the_timeout() {
    let router = Router::new().route(
        "/api/portfolio",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "success": true, "data": {} }))
        }),
    );
    let url = serve(router).await;

    let started = Instant::now();
    let (_, source) = Bridge::new(&url, Duration::from_millis(200)).unwrap().load().await;
    assert_eq!(source, DataSource::Bundled);
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn unreachable_backends_fall_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_, source) = bridge(&format!("http://{addr}")).load().await;
    assert_eq!(source, DataSource::Bundled);
}

fn usage_recorder(seen: Arc<Mutex<Vec<String>>>) -> Router {
    Router::new()
        .route(
            "/api/portfolio",
            get(|| async { Json(json!({ "success": true, "data": {} })) }),
        )
        .route(
            "/api/analytics/command",
            post(|State(seen): State<Arc<Mutex<Vec<String>>>>, Json(body): Json<Value>| async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                seen.lock().push(body["command"].as_str().unwrap_or_default().to_owned());
                Json(json!({ "success": true, "message": "Command tracked" }))
            }),
        )
        .with_state(seen)
}

#[tokio::test]
async fn connected_sessions_report_usage_in_the_background() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let bridge = bridge(&serve(usage_recorder(seen.clone())).await);

    let (data, source) = bridge.load().await;
    let tracker = Arc::new(BridgeTracker::new(bridge).unwrap());
    let mut session = Session::new(data, source).with_tracker(tracker.clone());
    session.submit("  About ");
    session.submit("unknown thing");

    assert_eq!(tracker.flush(Duration::from_secs(3)).await, 0);
    let mut seen = seen.lock().clone();
    seen.sort();
    assert_eq!(seen, ["about", "unknown thing"]);
}

#[tokio::test]
async fn flushing_delivers_every_command_before_exit() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let bridge = bridge(&serve(usage_recorder(seen.clone())).await);

    let (data, source) = bridge.load().await;
    let tracker = Arc::new(BridgeTracker::new(bridge).unwrap());
    let mut session = Session::new(data, source).with_tracker(tracker.clone());
    for command in ["about", "skills", "projects"] {
        session.submit(command);
    }
    assert_eq!(tracker.pending(), 3);

    assert_eq!(tracker.flush(Duration::from_secs(3)).await, 0);
    assert_eq!(tracker.pending(), 0);
    let mut seen = seen.lock().clone();
    seen.sort();
    assert_eq!(seen, ["about", "projects", "skills"]);
}

#[tokio::test]
async fn flushing_gives_up_at_the_timeout() {
    let router = Router::new().route(
        "/api/analytics/command",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "success": true }))
        }),
    );
    let tracker = BridgeTracker::new(bridge(&serve(router).await)).unwrap();
    tracker.track("about");

    let started = Instant::now();
    assert_eq!(tracker.flush(Duration::from_millis(100)).await, 1);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn tracking_failures_surface_only_to_direct_callers() {
    let router = Router::new().route(
        "/api/analytics/command",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "success": false }))) }),
    );
    let bridge = bridge(&serve(router).await);
    assert!(bridge.track("about").await.is_err());
}

#[tokio::test]
async fn health_reads_the_success_flag() {
    let router = Router::new().route(
        "/health",
        get(|| async { Json(json!({ "success": true, "status": "up", "version": "0.1.0", "uptime": 3 })) }),
    );
    assert!(bridge(&serve(router).await).health().await.unwrap());
}

#[tokio::test]
async fn contact_submissions_return_the_server_envelope() {
    let router = Router::new().route(
        "/api/contact",
        post(|Json(body): Json<Value>| async move {
            if body["message"].as_str().unwrap_or_default().len() < 10 {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Validation error",
                        "errors": ["\"message\" length must be at least 10 characters long"]
                    })),
                );
            }
            (
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "Contact message submitted successfully!",
                    "data": {
                        "id": "abcdefghijkl",
                        "name": body["name"],
                        "email": body["email"],
                        "submittedAt": "2026-01-01T00:00:00.000000Z"
                    }
                })),
            )
        }),
    );
    let bridge = bridge(&serve(router).await);

    let request = ContactRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello there, world!".into(),
    };
    let envelope = bridge.submit_contact(&request).await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().id, "abcdefghijkl");

    let short = ContactRequest { message: "short".into(), ..request };
    let envelope = bridge.submit_contact(&short).await.unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.errors.unwrap().len(), 1);
}
