//! Request DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// User password.
    /// Length validation prevents DoS via extremely long passwords that
    /// would consume excessive CPU during hashing.
    #[validate(length(min = 1, max = 1024, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login_request() {
        let request = LoginRequest {
            email: "admin@acme.test".to_string(),
            password: "password".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        let request = LoginRequest {
            email: "admin@acme.test".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
