//! Error types for the Tenants API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error response format for API errors.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors that can occur during tenant administration operations.
#[derive(Debug, Error)]
pub enum TenantError {
    /// Missing or invalid bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller lacks the required role or targets a foreign tenant.
    #[error("{0}")]
    Forbidden(String),

    /// Tenant not found.
    #[error("Tenant not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] notable_db::DbError),
}

impl TenantError {
    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}

impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TenantError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            TenantError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            TenantError::NotFound => (StatusCode::NOT_FOUND, "Tenant not found".to_string()),
            TenantError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_403() {
        let response = TenantError::forbidden("Cannot upgrade different tenant").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = TenantError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response = TenantError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
