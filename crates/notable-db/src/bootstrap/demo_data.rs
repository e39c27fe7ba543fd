//! Idempotent demo tenant and user seeding.

use sqlx::PgPool;

use super::{DEMO_TENANTS, DEMO_USERS};
use crate::error::DbError;

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedResult {
    /// Number of tenants inserted by this run.
    pub tenants_created: u64,
    /// Number of users inserted by this run.
    pub users_created: u64,
}

impl SeedResult {
    /// Returns `true` if this run inserted anything.
    #[must_use]
    pub fn created_anything(&self) -> bool {
        self.tenants_created > 0 || self.users_created > 0
    }
}

/// Seed the demo tenants and users.
///
/// `password_hash` is the PHC-formatted hash shared by all demo accounts;
/// the caller hashes the demo password once so this crate stays free of
/// hashing concerns.
///
/// # Errors
///
/// Returns `DbError::QueryFailed` if any insert fails.
pub async fn seed_demo_data(pool: &PgPool, password_hash: &str) -> Result<SeedResult, DbError> {
    let mut result = SeedResult::default();

    for (slug, name) in DEMO_TENANTS {
        let inserted = sqlx::query(
            r"
            INSERT INTO tenants (slug, name, plan)
            VALUES ($1, $2, 'FREE')
            ON CONFLICT (slug) DO NOTHING
            ",
        )
        .bind(slug)
        .bind(name)
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        result.tenants_created += inserted.rows_affected();
    }

    for (email, tenant_slug, role) in DEMO_USERS {
        let inserted = sqlx::query(
            r"
            INSERT INTO users (tenant_id, email, password_hash, role)
            SELECT id, $2, $3, $4
            FROM tenants
            WHERE slug = $1
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(tenant_slug)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        result.users_created += inserted.rows_affected();
    }

    if result.created_anything() {
        tracing::info!(
            tenants = result.tenants_created,
            users = result.users_created,
            "Demo data seeded"
        );
    } else {
        tracing::debug!("Demo data already present, nothing seeded");
    }

    Ok(result)
}
