//! JWT claims carrying the full caller identity.
//!
//! The identity (user id, email, role, tenant id, tenant slug, tenant plan)
//! is produced once at login, embedded verbatim into the signed token and
//! treated as immutable for the token's lifetime. A plan upgrade does not
//! rewrite outstanding tokens; clients re-login to pick up the new plan.

use chrono::Utc;
use notable_core::{TenantId, TenantPlan, UserId, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token validity in hours from issuance.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// JWT claims containing standard and Notable-specific claims.
///
/// # Standard Claims (RFC 7519)
///
/// - `sub`: Subject (the user ID)
/// - `iss`: Issuer
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (Unix timestamp)
///
/// # Custom Claims
///
/// - `email`: User email address
/// - `role`: User role within the tenant
/// - `tid`: Tenant ID (the multi-tenant isolation key)
/// - `tenant_slug`: URL-safe tenant slug
/// - `tenant_plan`: Tenant subscription plan at issuance time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject - the user ID.
    pub sub: String,

    /// Issuer - who created the token.
    pub iss: String,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// User email address.
    pub email: String,

    /// User role within the tenant.
    pub role: UserRole,

    /// Tenant ID for multi-tenant isolation.
    pub tid: Uuid,

    /// URL-safe tenant slug.
    pub tenant_slug: String,

    /// Tenant subscription plan at issuance time.
    pub tenant_plan: TenantPlan,
}

impl Claims {
    /// Create a new builder for constructing claims.
    #[must_use]
    pub fn builder() -> ClaimsBuilder {
        ClaimsBuilder::default()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Get the tenant ID as a typed `TenantId`.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        TenantId::from_uuid(self.tid)
    }

    /// Get the user ID as a typed `UserId`, if `sub` parses as a UUID.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse::<Uuid>().ok().map(UserId::from_uuid)
    }

    /// Check if the caller holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Builder for constructing JWT claims.
#[derive(Debug, Default)]
pub struct ClaimsBuilder {
    sub: Option<String>,
    iss: Option<String>,
    exp: Option<i64>,
    iat: Option<i64>,
    email: Option<String>,
    role: Option<UserRole>,
    tid: Option<Uuid>,
    tenant_slug: Option<String>,
    tenant_plan: Option<TenantPlan>,
}

impl ClaimsBuilder {
    /// Set the subject from a typed user ID.
    #[must_use]
    pub fn user_id(mut self, id: UserId) -> Self {
        self.sub = Some(id.to_string());
        self
    }

    /// Set the subject directly.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set expiration time as Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set expiration time as seconds from now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some(Utc::now().timestamp() + secs);
        self
    }

    /// Set the issued at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the user's email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the user's role.
    #[must_use]
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the tenant ID.
    #[must_use]
    pub fn tenant_id(mut self, tid: TenantId) -> Self {
        self.tid = Some(*tid.as_uuid());
        self
    }

    /// Set the tenant slug.
    #[must_use]
    pub fn tenant_slug(mut self, slug: impl Into<String>) -> Self {
        self.tenant_slug = Some(slug.into());
        self
    }

    /// Set the tenant plan.
    #[must_use]
    pub fn tenant_plan(mut self, plan: TenantPlan) -> Self {
        self.tenant_plan = Some(plan);
        self
    }

    /// Build the claims.
    ///
    /// # Defaults
    ///
    /// - `iss`: "notable" if not set
    /// - `exp`: [`TOKEN_VALIDITY_HOURS`] from now if not set
    /// - `iat`: Current time if not set
    /// - `role`: `MEMBER`, `tenant_plan`: `FREE` if not set
    #[must_use]
    pub fn build(self) -> Claims {
        let now = Utc::now().timestamp();

        Claims {
            sub: self.sub.unwrap_or_default(),
            iss: self.iss.unwrap_or_else(|| "notable".to_string()),
            exp: self.exp.unwrap_or(now + TOKEN_VALIDITY_HOURS * 3600),
            iat: self.iat.unwrap_or(now),
            email: self.email.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            tid: self.tid.unwrap_or_else(Uuid::nil),
            tenant_slug: self.tenant_slug.unwrap_or_default(),
            tenant_plan: self.tenant_plan.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_builder_basic() {
        let user_id = UserId::new();
        let claims = Claims::builder()
            .user_id(user_id)
            .email("member@acme.test")
            .build();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "member@acme.test");
        assert_eq!(claims.iss, "notable");
        assert_eq!(claims.user_id(), Some(user_id));
    }

    #[test]
    fn test_claims_builder_with_tenant() {
        let tenant_id = TenantId::new();
        let claims = Claims::builder()
            .tenant_id(tenant_id)
            .tenant_slug("acme")
            .tenant_plan(TenantPlan::Pro)
            .build();

        assert_eq!(claims.tenant_id(), tenant_id);
        assert_eq!(claims.tenant_slug, "acme");
        assert_eq!(claims.tenant_plan, TenantPlan::Pro);
    }

    #[test]
    fn test_claims_role() {
        let claims = Claims::builder().role(UserRole::Admin).build();
        assert!(claims.is_admin());

        let claims = Claims::builder().role(UserRole::Member).build();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_default_expiry_is_24h() {
        let before = Utc::now().timestamp();
        let claims = Claims::builder().build();
        let after = Utc::now().timestamp();

        assert!(claims.exp >= before + TOKEN_VALIDITY_HOURS * 3600);
        assert!(claims.exp <= after + TOKEN_VALIDITY_HOURS * 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_expiration() {
        let claims = Claims::builder().expires_in_secs(3600).build();
        assert!(!claims.is_expired());

        let claims = Claims::builder()
            .expiration(Utc::now().timestamp() - 3600)
            .build();
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization_round_trip() {
        let claims = Claims::builder()
            .user_id(UserId::new())
            .email("admin@acme.test")
            .role(UserRole::Admin)
            .tenant_id(TenantId::new())
            .tenant_slug("acme")
            .tenant_plan(TenantPlan::Free)
            .build();

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_user_id_with_non_uuid_subject() {
        let claims = Claims::builder().subject("not-a-uuid").build();
        assert_eq!(claims.user_id(), None);
    }
}
