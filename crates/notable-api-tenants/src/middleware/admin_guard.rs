//! Admin role guard middleware.
//!
//! Rejects callers without the ADMIN role before the handler runs.
//! Non-admins receive 403 regardless of which tenant slug they target;
//! the same-tenant check happens afterwards, in the handler.

use crate::error::TenantError;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use notable_auth::Claims;

/// Middleware that requires the authenticated caller to hold the ADMIN role.
///
/// Requires a prior authentication middleware to have inserted `Claims`
/// into the request extensions; if none are found the request is rejected
/// with 401.
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{middleware, routing::post, Router};
/// use notable_api_tenants::admin_guard;
///
/// let router = Router::new()
///     .route("/:slug/upgrade", post(upgrade_tenant_handler))
///     .layer(middleware::from_fn(admin_guard));
/// ```
///
/// # Errors
///
/// - `TenantError::Unauthorized` (401): no claims in request extensions
/// - `TenantError::Forbidden` (403): caller is not an ADMIN
pub async fn admin_guard(request: Request<Body>, next: Next) -> Result<Response, TenantError> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or(TenantError::Unauthorized)?;

    if !claims.is_admin() {
        tracing::warn!(
            user_id = %claims.sub,
            role = %claims.role,
            "Access denied: admin role required"
        );
        return Err(TenantError::forbidden("Forbidden: Admin role required"));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::post,
        Extension, Router,
    };
    use notable_core::{TenantId, TenantPlan, UserId, UserRole};
    use tower::ServiceExt;

    fn claims_with_role(role: UserRole) -> Claims {
        Claims::builder()
            .user_id(UserId::new())
            .email("someone@acme.test")
            .role(role)
            .tenant_id(TenantId::new())
            .tenant_slug("acme")
            .tenant_plan(TenantPlan::Free)
            .build()
    }

    fn guarded_app(claims: Option<Claims>) -> Router {
        let router = Router::new()
            .route("/upgrade", post(|| async { "ok" }))
            .layer(middleware::from_fn(admin_guard));

        match claims {
            Some(claims) => router.layer(Extension(claims)),
            None => router,
        }
    }

    async fn send(app: Router) -> StatusCode {
        app.oneshot(
            HttpRequest::builder()
                .method("POST")
                .uri("/upgrade")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_admin_passes() {
        let app = guarded_app(Some(claims_with_role(UserRole::Admin)));
        assert_eq!(send(app).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_member_rejected_with_403() {
        let app = guarded_app(Some(claims_with_role(UserRole::Member)));
        assert_eq!(send(app).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_claims_rejected_with_401() {
        let app = guarded_app(None);
        assert_eq!(send(app).await, StatusCode::UNAUTHORIZED);
    }
}
