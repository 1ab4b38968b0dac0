use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use radio_read::config::ServerConfig;
use radio_read::server::{create_router, AppState};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

fn create_test_app(max_request_bytes: usize) -> Router {
    let config = ServerConfig {
        port: 0,
        request_timeout: Duration::from_secs(5),
        max_request_bytes,
    };

    create_router(AppState::new(&config, Duration::from_secs(5)))
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app(64 * 1024);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-Request-ID"));

    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_generate_spot() {
    let app = create_test_app(64 * 1024);
    let brief = json!({
        "brand": "Dex Tacos",
        "offer": "2 tacos for $5",
        "audience": "late-night snackers",
        "cta": "Visit dextacos.com",
        "duration": 15
    });

    let response = app
        .oneshot(post_json("/api/generate", brief.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["meta"]["duration"], 15);
    assert_eq!(body["meta"]["targets"]["min"], 35);
    assert_eq!(body["meta"]["targets"]["max"], 50);

    let output = body["output"].as_str().unwrap();
    assert!(output.contains("Dex Tacos"));
    assert!(output.contains("two tacos for five"));
    assert!(output.contains("dextacos-dot-com"));
    assert!(!output.contains('$'));

    let words = body["meta"]["words"].as_u64().unwrap();
    assert_eq!(words as usize, output.split_whitespace().count());
}

#[tokio::test]
async fn test_generate_reads_nested_brief_and_duration_text() {
    let app = create_test_app(64 * 1024);
    let request = json!({
        "brief": { "brand": "Sunrise Diner", "details": "Open at 6:00" },
        "mode": "give me a :60"
    });

    let response = app
        .oneshot(post_json("/api/generate", request.to_string()))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["meta"]["duration"], 60);

    let output = body["output"].as_str().unwrap();
    assert!(output.contains("Sunrise Diner"));
    assert!(output.contains("six o'clock"));
}

#[tokio::test]
async fn test_generate_with_invalid_json_still_returns_spot() {
    let app = create_test_app(64 * 1024);

    let response = app
        .oneshot(post_json("/api/generate", "not json at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["meta"]["duration"], 30);
    assert!(body["output"].as_str().unwrap().contains("[BRAND]"));
}

#[tokio::test]
async fn test_normalize_endpoint() {
    let app = create_test_app(64 * 1024);

    let response = app
        .oneshot(post_json(
            "/api/normalize",
            json!({ "text": "Call 555-123-4567 before 9:00" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["output"],
        "Call five. five. five. one. two. three. four-five. six-seven. before nine o'clock"
    );
}

#[tokio::test]
async fn test_normalize_without_text_is_bad_request() {
    let app = create_test_app(64 * 1024);

    let response = app
        .oneshot(post_json("/api/normalize", json!({ "copy": "hi" }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = create_test_app(32);
    let request = json!({ "details": "x".repeat(100) });

    let response = app
        .oneshot(post_json("/api/generate", request.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body = read_json(response).await;
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app(64 * 1024);

    let response = app
        .oneshot(Request::builder().uri("/api/voices").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
