//! Error types for the notable-auth crate.

use thiserror::Error;

/// Errors that can occur during token or password operations.
///
/// The HTTP layer collapses every token-verification variant into a single
/// 401 response; the granularity here exists for server-side logging.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token format is invalid (malformed, bad base64, bad JSON).
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token has expired.
    #[error("Token has expired")]
    TokenExpired,

    /// Signature verification failed.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token uses an unsupported algorithm.
    #[error("Invalid token algorithm")]
    InvalidAlgorithm,

    /// A required claim is missing.
    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            AuthError::MissingClaim("tid".to_string()).to_string(),
            "Missing required claim: tid"
        );
    }
}
