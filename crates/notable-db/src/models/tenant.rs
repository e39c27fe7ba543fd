//! Tenant model.

use chrono::{DateTime, Utc};
use notable_core::TenantPlan;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A tenant in the Notable platform.
///
/// Tenants represent isolated customer accounts. All users and notes are
/// scoped to a specific tenant; the tenant is also the unit of billing
/// (its plan governs the note quota).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier for the tenant.
    pub id: Uuid,

    /// URL-safe slug (e.g., "acme"). Unique across all tenants.
    pub slug: String,

    /// Human-readable name (e.g., "Acme Corp").
    pub name: String,

    /// Subscription plan. The only supported transition is FREE to PRO.
    pub plan: TenantPlan,

    /// Timestamp when the tenant was created.
    pub created_at: DateTime<Utc>,

    /// Timestamp when the tenant was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Finds a tenant by its ID.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, slug, name, plan, created_at, updated_at
            FROM tenants
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a tenant by its slug.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, slug, name, plan, created_at, updated_at
            FROM tenants
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Upgrades the tenant identified by `slug` to the PRO plan.
    ///
    /// Returns the updated row, or `None` if no tenant has that slug.
    /// The update is a plain overwrite: upgrading an already-PRO tenant
    /// succeeds and leaves it PRO.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn upgrade_plan(pool: &PgPool, slug: &str) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            UPDATE tenants
            SET plan = 'PRO', updated_at = now()
            WHERE slug = $1
            RETURNING id, slug, name, plan, created_at, updated_at
            ",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }
}

#[cfg(test)]
mod tests {
    // Query methods require a real database and are covered by the
    // service-level integration tests.
}
