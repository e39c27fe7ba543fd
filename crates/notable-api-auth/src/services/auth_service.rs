//! Authentication service for credential verification.

use crate::error::ApiAuthError;
use notable_auth::PasswordHasher;
use notable_db::{Tenant, User};
use sqlx::PgPool;

/// Service for verifying user credentials.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    password_hasher: PasswordHasher,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Authenticate a user with email and password.
    ///
    /// Returns the user together with their tenant; the tenant supplies
    /// the slug and plan embedded into the issued token.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::InvalidCredentials` for unknown email, wrong
    ///   password, or a dangling tenant reference. The three are not
    ///   distinguishable from the response.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, Tenant), ApiAuthError> {
        let Some(user) = User::find_by_email(&self.pool, email).await? else {
            return Err(ApiAuthError::InvalidCredentials);
        };

        let valid = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| ApiAuthError::Internal(format!("Password verification failed: {e}")))?;
        if !valid {
            return Err(ApiAuthError::InvalidCredentials);
        }

        let Some(tenant) = Tenant::find_by_id(&self.pool, user.tenant_id).await? else {
            tracing::error!(
                user_id = %user.id,
                tenant_id = %user.tenant_id,
                "User references a nonexistent tenant"
            );
            return Err(ApiAuthError::InvalidCredentials);
        };

        tracing::info!(
            user_id = %user.id,
            tenant_id = %user.tenant_id,
            "User authenticated"
        );

        Ok((user, tenant))
    }
}
