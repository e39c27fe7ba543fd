//! Integration tests for CORS configuration.
//!
//! Every route answers OPTIONS preflight; the default configuration is
//! permissive.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::post,
    Router,
};
use tower::ServiceExt;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Router with the app's permissive default CORS.
fn test_router_any_origin() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/notes", post(|| async { "ok" }))
        .layer(cors)
}

/// Router with a restricted origin list, as `CORS_ORIGINS` configures.
fn test_router_with_origins(allowed: &[&str]) -> Router {
    let origins: Vec<_> = allowed.iter().filter_map(|o| o.parse().ok()).collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/notes", post(|| async { "ok" }))
        .layer(cors)
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/notes")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_returns_200_with_any_origin() {
    let response = test_router_any_origin()
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    assert_eq!(allow_origin.unwrap().to_str().unwrap(), "*");
}

#[tokio::test]
async fn test_preflight_allowed_origin_echoed() {
    let response = test_router_with_origins(&["http://localhost:3000"])
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap()
            .to_str()
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_preflight_disallowed_origin_gets_no_cors_header() {
    let response = test_router_with_origins(&["http://localhost:3000"])
        .oneshot(preflight("http://evil.example"))
        .await
        .unwrap();

    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    if let Some(origin) = allow_origin {
        assert_ne!(origin.to_str().unwrap(), "http://evil.example");
    }
}
