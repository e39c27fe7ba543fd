//! User roles.
//!
//! Notable has exactly two roles: `ADMIN` and `MEMBER`. Admin-only
//! actions (tenant plan upgrade) reject any non-admin caller.

use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Role of a user within their tenant.
///
/// Stored in PostgreSQL as the `user_role` enum and serialized on the
/// wire as `"ADMIN"` / `"MEMBER"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Type, Serialize, Deserialize, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Tenant administrator. May upgrade the tenant's plan.
    Admin,
    /// Regular member.
    #[default]
    Member,
}

impl UserRole {
    /// Returns `true` for the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        *self == UserRole::Admin
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::Member => write!(f, "MEMBER"),
        }
    }
}
