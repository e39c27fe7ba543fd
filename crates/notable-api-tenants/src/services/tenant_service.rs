//! Tenant service: plan upgrade.

use crate::error::TenantError;
use notable_db::Tenant;
use sqlx::PgPool;

/// Service for tenant administration operations.
#[derive(Clone)]
pub struct TenantService {
    pool: PgPool,
}

impl TenantService {
    /// Create a new tenant service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upgrade the tenant identified by `slug` to the PRO plan.
    ///
    /// The transition is one-directional; there is no downgrade path.
    /// Upgrading an already-PRO tenant succeeds and leaves it PRO.
    ///
    /// # Errors
    ///
    /// - `TenantError::NotFound` when no tenant has that slug
    /// - `TenantError::Database` on storage failure
    pub async fn upgrade(&self, slug: &str) -> Result<Tenant, TenantError> {
        let tenant = Tenant::upgrade_plan(&self.pool, slug)
            .await?
            .ok_or(TenantError::NotFound)?;

        tracing::info!(
            tenant_id = %tenant.id,
            slug = %tenant.slug,
            "Tenant upgraded to PRO"
        );

        Ok(tenant)
    }
}

#[cfg(test)]
mod tests {
    // TenantService::upgrade requires a real database and is covered by
    // integration tests.
}
