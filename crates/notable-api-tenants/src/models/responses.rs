//! Response DTOs for tenant endpoints.

use notable_core::TenantPlan;
use notable_db::Tenant;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a tenant, echoed after an upgrade.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantSummary {
    /// URL-safe slug.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    /// Subscription plan after the operation.
    pub plan: TenantPlan,
}

impl From<Tenant> for TenantSummary {
    fn from(tenant: Tenant) -> Self {
        Self {
            slug: tenant.slug,
            name: tenant.name,
            plan: tenant.plan,
        }
    }
}

/// Successful upgrade response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpgradeResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The upgraded tenant.
    pub tenant: TenantSummary,
}
