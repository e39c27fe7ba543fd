//! Token service for issuing bearer tokens.
//!
//! The full identity (user id, email, role, tenant id, tenant slug,
//! tenant plan) is embedded into the token at issuance and is immutable
//! for the token's 24 hour lifetime. There is no refresh flow; clients
//! re-login to pick up identity changes such as a plan upgrade.

use crate::error::ApiAuthError;
use notable_auth::{encode_token, Claims, TOKEN_VALIDITY_HOURS};
use notable_db::{Tenant, User};

/// Configuration for token generation.
#[derive(Clone)]
pub struct TokenConfig {
    /// Shared HS256 signing secret.
    pub secret: String,
    /// Token issuer (iss claim).
    pub issuer: String,
}

/// Service for issuing signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    /// Create a new token service.
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Issue a signed token for an authenticated user.
    ///
    /// The token expires [`TOKEN_VALIDITY_HOURS`] hours after issuance.
    ///
    /// # Errors
    ///
    /// Returns `ApiAuthError::Internal` if encoding fails.
    pub fn issue(&self, user: &User, tenant: &Tenant) -> Result<String, ApiAuthError> {
        let claims = Claims::builder()
            .user_id(user.user_id())
            .issuer(&self.config.issuer)
            .email(&user.email)
            .role(user.role)
            .tenant_id(notable_core::TenantId::from_uuid(tenant.id))
            .tenant_slug(&tenant.slug)
            .tenant_plan(tenant.plan)
            .expires_in_secs(TOKEN_VALIDITY_HOURS * 3600)
            .build();

        encode_token(&claims, self.config.secret.as_bytes())
            .map_err(|e| ApiAuthError::Internal(format!("Token encoding failed: {e}")))
    }
}
