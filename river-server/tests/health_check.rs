use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use river_server::{AppState, Config, api};
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_reports_server_status() {
    let state = AppState::new(&Config::default()).expect("state");
    let app = api::create_router(state);

    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.expect("request");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "OK");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}
