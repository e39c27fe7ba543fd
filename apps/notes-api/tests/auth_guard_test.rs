//! Integration tests for the authentication and authorization guards.
//!
//! These tests mount the real routers with the real bearer-token
//! middleware. The database pool is created lazily and never connects:
//! every request here must be rejected before any storage access, which
//! is exactly what the assertions verify.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Extension, Router,
};
use http_body_util::BodyExt;
use notable_api_auth::{jwt_auth_middleware, JwtSecret};
use notable_api_notes::{notes_router, NotesState};
use notable_api_tenants::{tenants_router, TenantsState};
use notable_auth::{encode_token, Claims};
use notable_core::{TenantId, TenantPlan, UserId, UserRole};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Build the protected app the way main.rs does, over a pool that parses
/// but never connects.
fn test_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unreachable")
        .unwrap();

    let jwt_secret = JwtSecret(TEST_SECRET.to_string());

    let notes_routes = notes_router(NotesState::new(pool.clone()))
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(jwt_secret.clone()));

    let tenants_routes = tenants_router(TenantsState::new(pool))
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(jwt_secret));

    Router::new()
        .nest("/notes", notes_routes)
        .nest("/tenants", tenants_routes)
}

fn token(role: UserRole, slug: &str, secret: &str) -> String {
    let claims = Claims::builder()
        .user_id(UserId::new())
        .email("someone@acme.test")
        .role(role)
        .tenant_id(TenantId::new())
        .tenant_slug(slug)
        .tenant_plan(TenantPlan::Free)
        .build();
    encode_token(&claims, secret.as_bytes()).unwrap()
}

fn get_notes(auth: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/notes");
    if let Some(value) = auth {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_missing_header_yields_401_without_storage_access() {
    let response = test_app().oneshot(get_notes(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_header_yields_401() {
    let response = test_app()
        .oneshot(get_notes(Some("Token abcdef".to_string())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_yields_401() {
    let response = test_app()
        .oneshot(get_notes(Some("Bearer not.a.token".to_string())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_yields_401() {
    let claims = Claims::builder()
        .user_id(UserId::new())
        .role(UserRole::Member)
        .tenant_id(TenantId::new())
        .tenant_slug("acme")
        .tenant_plan(TenantPlan::Free)
        .expiration(chrono::Utc::now().timestamp() - 7200)
        .build();
    let token = encode_token(&claims, TEST_SECRET.as_bytes()).unwrap();

    let response = test_app()
        .oneshot(get_notes(Some(format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_with_wrong_secret_yields_401() {
    let token = token(UserRole::Member, "acme", "another-secret-0123456789abcdefgh");

    let response = test_app()
        .oneshot(get_notes(Some(format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_without_title_yields_400_before_storage() {
    let token = token(UserRole::Member, "acme", TEST_SECRET);

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/notes")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body(Body::from(r#"{"content":"no title"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Title is required");
}

#[tokio::test]
async fn test_malformed_note_id_yields_400() {
    let token = token(UserRole::Member, "acme", TEST_SECRET);

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/notes/not-a-uuid")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_member_upgrade_attempt_yields_403_regardless_of_slug() {
    for slug in ["acme", "globex"] {
        let token = token(UserRole::Member, "acme", TEST_SECRET);

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/tenants/{slug}/upgrade"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Forbidden: Admin role required");
    }
}

#[tokio::test]
async fn test_admin_cross_tenant_upgrade_yields_403() {
    let token = token(UserRole::Admin, "acme", TEST_SECRET);

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tenants/globex/upgrade")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Cannot upgrade different tenant");
}

#[tokio::test]
async fn test_unauthorized_upgrade_yields_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tenants/acme/upgrade")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
