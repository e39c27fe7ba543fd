//! Response DTOs for authentication endpoints.

use notable_core::{TenantPlan, UserRole};
use notable_db::{Tenant, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The authenticated user, echoed in the login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    /// User ID.
    pub id: Uuid,
    /// User email address.
    pub email: String,
    /// Role within the tenant.
    pub role: UserRole,
    /// URL-safe slug of the user's tenant.
    pub tenant_slug: String,
    /// Subscription plan of the user's tenant.
    pub tenant_plan: TenantPlan,
}

impl UserInfo {
    /// Build the response view from a user and their tenant.
    #[must_use]
    pub fn from_user_and_tenant(user: &User, tenant: &Tenant) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            tenant_slug: tenant.slug.clone(),
            tenant_plan: tenant.plan,
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed bearer token, valid for 24 hours.
    pub token: String,
    /// The authenticated user.
    pub user: UserInfo,
}
