//! Tenant upgrade endpoint handler.
//!
//! POST /tenants/:slug/upgrade - Upgrade the caller's tenant to PRO.

use crate::error::TenantError;
use crate::models::{TenantSummary, UpgradeResponse};
use crate::services::TenantService;
use axum::extract::Path;
use axum::{Extension, Json};
use notable_auth::Claims;
use std::sync::Arc;

/// Upgrades a tenant to the PRO plan.
///
/// The admin guard has already rejected non-admin callers. The slug in
/// the path must equal the caller's own tenant slug: an admin of one
/// tenant cannot upgrade another, whatever slug they supply.
#[utoipa::path(
    post,
    path = "/tenants/{slug}/upgrade",
    params(("slug" = String, Path, description = "Tenant slug")),
    responses(
        (status = 200, description = "Tenant upgraded to PRO", body = UpgradeResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin, or foreign tenant slug"),
        (status = 404, description = "Tenant not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Tenants"
)]
pub async fn upgrade_tenant_handler(
    Extension(claims): Extension<Claims>,
    Extension(tenant_service): Extension<Arc<TenantService>>,
    Path(slug): Path<String>,
) -> Result<Json<UpgradeResponse>, TenantError> {
    if slug != claims.tenant_slug {
        tracing::warn!(
            user_id = %claims.sub,
            own_slug = %claims.tenant_slug,
            target_slug = %slug,
            "Cross-tenant upgrade attempt rejected"
        );
        return Err(TenantError::forbidden("Cannot upgrade different tenant"));
    }

    let tenant = tenant_service.upgrade(&slug).await?;

    Ok(Json(UpgradeResponse {
        message: "Tenant upgraded to Pro plan successfully".to_string(),
        tenant: TenantSummary::from(tenant),
    }))
}
