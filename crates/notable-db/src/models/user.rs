//! User entity model.

use chrono::{DateTime, Utc};
use notable_core::{TenantAware, TenantId, UserId, UserRole};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A user account in the system.
///
/// Users belong to exactly one tenant. Email is globally unique because
/// login carries no tenant context; the tenant is resolved from the row.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The tenant this user belongs to.
    pub tenant_id: Uuid,

    /// User's email address.
    pub email: String,

    /// Argon2id password hash (PHC string).
    pub password_hash: String,

    /// Role within the tenant.
    pub role: UserRole,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Get the user ID as a typed `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.id)
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, tenant_id, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }
}

impl TenantAware for User {
    fn tenant_id(&self) -> TenantId {
        TenantId::from_uuid(self.tenant_id)
    }
}
