//! Error types for the authentication API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error response format for API errors.
///
/// The optional `code` field carries a machine-readable discriminator;
/// in this API surface only the note-quota rejection uses it.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorBody {
    /// Create an error body with just a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create an error body with a machine-readable code.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum ApiAuthError {
    /// Request input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Email/password combination is invalid.
    ///
    /// Deliberately covers both unknown email and wrong password so the
    /// response does not reveal which one failed.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] notable_db::DbError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiAuthError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiAuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiAuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiAuthError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiAuthError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiAuthError::Validation("Email and password are required".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let response = ApiAuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_is_genericized() {
        let response = ApiAuthError::Internal("secret detail".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_code_skipped_when_none() {
        let json = serde_json::to_string(&ErrorBody::new("nope")).unwrap();
        assert_eq!(json, r#"{"error":"nope"}"#);

        let json = serde_json::to_string(&ErrorBody::with_code("nope", "SOME_CODE")).unwrap();
        assert!(json.contains("SOME_CODE"));
    }
}
