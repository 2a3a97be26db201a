mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use business_snapshot::infrastructure::persistence::InMemoryBusinessRepository;
use business_snapshot::routes::app_router;
use business_snapshot::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn memory_state() -> AppState {
    common::create_test_state(Arc::new(InMemoryBusinessRepository::new()), &[0.26])
}

fn get(uri: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap()
}

fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", "203.0.113.7")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(memory_state(), true, &[]);

    let response = app
        .clone()
        .oneshot(get("/businesses/", "203.0.113.7"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, json!([]));

    let response = app.oneshot(get("/health/", "203.0.113.7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = app_router(memory_state(), true, &[]);

    let response = app
        .oneshot(get_with_origin("/businesses", "https://anywhere.example"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_wildcard_entry_allows_any_origin() {
    let app = app_router(memory_state(), true, &["*".to_string()]);

    let response = app
        .oneshot(get_with_origin("/businesses", "https://anywhere.example"))
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_for_json_post() {
    let app = app_router(memory_state(), true, &[]);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/business-data")
        .header("x-forwarded-for", "203.0.113.7")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_origin_list_restricts_header() {
    let allowed = vec!["https://app.example.com".to_string()];
    let app = app_router(memory_state(), true, &allowed);

    let response = app
        .clone()
        .oneshot(get_with_origin("/businesses", "https://app.example.com"))
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://app.example.com"
    );

    let response = app
        .oneshot(get_with_origin("/businesses", "https://evil.example"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_proxy_rate_limit_is_keyed_on_forwarded_ip() {
    let app = app_router(memory_state(), true, &[]);

    let first = app
        .clone()
        .oneshot(get("/health", "198.51.100.1"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let mut limited = false;
    for _ in 0..200 {
        let response = app
            .clone()
            .oneshot(get("/health", "198.51.100.1"))
            .await
            .unwrap();
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = true;
            break;
        }
    }
    assert!(limited, "burst from one client was never limited");

    let other = app.oneshot(get("/health", "198.51.100.2")).await.unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}
