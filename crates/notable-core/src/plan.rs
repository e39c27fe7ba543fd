//! Tenant subscription plans.

use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Subscription plan of a tenant.
///
/// `FREE` tenants are capped on the number of notes they may hold; `PRO`
/// tenants have no ceiling. The only supported transition is FREE to PRO.
///
/// Stored in PostgreSQL as the `tenant_plan` enum and serialized on the
/// wire as `"FREE"` / `"PRO"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Type, Serialize, Deserialize, ToSchema,
)]
#[sqlx(type_name = "tenant_plan", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TenantPlan {
    /// Free tier, quota-limited.
    #[default]
    Free,
    /// Paid tier, unlimited notes.
    Pro,
}

impl TenantPlan {
    /// Returns `true` for the free tier.
    #[must_use]
    pub fn is_free(&self) -> bool {
        *self == TenantPlan::Free
    }
}

impl std::fmt::Display for TenantPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenantPlan::Free => write!(f, "FREE"),
            TenantPlan::Pro => write!(f, "PRO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_free() {
        assert!(TenantPlan::Free.is_free());
        assert!(!TenantPlan::Pro.is_free());
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&TenantPlan::Free).unwrap(), "\"FREE\"");
        assert_eq!(serde_json::to_string(&TenantPlan::Pro).unwrap(), "\"PRO\"");

        let plan: TenantPlan = serde_json::from_str("\"PRO\"").unwrap();
        assert_eq!(plan, TenantPlan::Pro);
    }

    #[test]
    fn test_default_is_free() {
        assert_eq!(TenantPlan::default(), TenantPlan::Free);
    }
}
