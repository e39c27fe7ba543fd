//! Password hashing with Argon2id.
//!
//! A salted slow hash with a fixed cost factor. The parameters are
//! constant for the life of the deployment; there is no rotation policy.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher with fixed Argon2id parameters.
///
/// Parameters (OWASP-recommended):
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with the fixed parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These are hardcoded constants that are
        // always valid; failure would indicate a bug in the argon2 crate.
        let params = Params::new(19456, 2, 1, None)
            .expect("fixed Argon2 parameters are valid constants");

        Self { params }
    }

    /// Hash a password using Argon2id.
    ///
    /// Returns a PHC-formatted hash string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a PHC-formatted hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the hash is not a valid
    /// PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingFailed(format!(
                "Verification failed: {e}"
            ))),
        }
    }
}

/// Hash a password with the default hasher.
///
/// # Errors
///
/// Returns `AuthError::HashingFailed` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// Verify a password against a hash with the default hasher.
///
/// # Errors
///
/// Returns `AuthError::InvalidHashFormat` if the hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    PasswordHasher::new().verify(password, hash)
}
