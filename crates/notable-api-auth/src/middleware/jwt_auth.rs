//! Bearer-token authentication middleware.
//!
//! Extracts and validates the JWT from the Authorization header, then
//! inserts `Claims`, `UserId`, and `TenantId` into request extensions.
//!
//! Every failure mode — missing header, malformed header, bad signature,
//! expired token — maps to the same 401 body, so a caller cannot probe
//! which check failed. Rejection happens before any storage access.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use notable_auth::decode_token;
use notable_core::{TenantId, UserId};

use crate::error::ErrorBody;

/// Wrapper for the shared signing secret, injected as a request extension.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// The single body returned for every authentication failure.
fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(ErrorBody::new("Unauthorized"))).into_response()
}

/// Bearer-token authentication middleware.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Decodes and validates the JWT against the shared secret
/// 3. Inserts `Claims`, `UserId`, and `TenantId` into request extensions
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{middleware, Extension, Router, routing::get};
/// use notable_api_auth::{jwt_auth_middleware, JwtSecret};
///
/// let router = Router::new()
///     .route("/notes", get(list_notes_handler))
///     .layer(middleware::from_fn(jwt_auth_middleware))
///     .layer(Extension(JwtSecret(secret)));
/// ```
pub async fn jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    // Get the signing secret from extensions
    let secret = request
        .extensions()
        .get::<JwtSecret>()
        .ok_or_else(|| {
            tracing::error!("JWT secret not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
                .into_response()
        })?
        .0
        .clone();

    // Extract Bearer token from Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)?;

    // Reject empty bearer tokens before attempting JWT decode.
    if token.is_empty() {
        return Err(unauthorized());
    }

    // Decode and validate the token
    let claims = decode_token(token, secret.as_bytes()).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized()
    })?;

    // The sub claim must be a user UUID
    let Some(user_id) = claims.user_id() else {
        tracing::warn!(sub = %claims.sub, "Token subject is not a user id");
        return Err(unauthorized());
    };
    let tenant_id: TenantId = claims.tenant_id();

    // Insert the verified identity into request extensions
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user_id);
    request.extensions_mut().insert(tenant_id);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use notable_auth::{encode_token, Claims};
    use notable_core::{TenantPlan, UserRole};
    use tower::ServiceExt;

    const TEST_SECRET: &str = "test-secret-with-enough-entropy-for-hs256";

    async fn whoami(Extension(claims): Extension<Claims>) -> String {
        claims.email
    }

    fn test_app() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn(jwt_auth_middleware))
            .layer(Extension(JwtSecret(TEST_SECRET.to_string())))
    }

    fn request_with_auth(auth: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn valid_token() -> String {
        let claims = Claims::builder()
            .user_id(UserId::new())
            .email("member@acme.test")
            .role(UserRole::Member)
            .tenant_id(TenantId::new())
            .tenant_slug("acme")
            .tenant_plan(TenantPlan::Free)
            .build();
        encode_token(&claims, TEST_SECRET.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let response = test_app().oneshot(request_with_auth(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_header_rejected() {
        let response = test_app()
            .oneshot(request_with_auth(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_bearer_token_rejected() {
        let response = test_app()
            .oneshot(request_with_auth(Some("Bearer ")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let response = test_app()
            .oneshot(request_with_auth(Some("Bearer not.a.token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_rejected() {
        let claims = Claims::builder().user_id(UserId::new()).build();
        let token = encode_token(&claims, b"a-completely-different-secret!!!").unwrap();

        let response = test_app()
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes_claims_to_handler() {
        use http_body_util::BodyExt;

        let token = valid_token();
        let response = test_app()
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"member@acme.test");
    }

    #[tokio::test]
    async fn test_failure_bodies_are_identical() {
        use http_body_util::BodyExt;

        let mut bodies = Vec::new();
        for auth in [None, Some("Bearer not.a.token"), Some("nonsense")] {
            let response = test_app().oneshot(request_with_auth(auth)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            bodies.push(response.into_body().collect().await.unwrap().to_bytes());
        }

        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }
}
