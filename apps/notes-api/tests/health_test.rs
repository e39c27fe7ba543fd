//! Integration tests for the health endpoint.
//!
//! These tests verify the /health endpoint behavior.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Create a test router mirroring the app's health route, without a
/// database (the real handler does not query it either).
fn test_app() -> Router {
    use axum::routing::get;

    Router::new().route(
        "/health",
        get(|| async {
            let response = serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "uptime_seconds": 0,
                "timestamp": chrono_stamp(),
            });
            axum::Json(response)
        }),
    )
}

fn chrono_stamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[tokio::test]
async fn test_health_endpoint_returns_200() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_response_structure() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    assert!(json["uptime_seconds"].is_number());
    assert!(json["timestamp"].is_string());
}
