//! Error types for the Notes API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Machine-readable code attached to quota rejections.
pub const NOTE_LIMIT_CODE: &str = "NOTE_LIMIT_REACHED";

/// Error response format for API errors.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Errors that can occur during note operations.
#[derive(Debug, Error)]
pub enum ApiNotesError {
    /// Request input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// FREE-plan tenant is at its note ceiling.
    #[error("Note limit reached. Upgrade to Pro for unlimited notes.")]
    QuotaExceeded,

    /// Note not found under the caller's tenant.
    ///
    /// Covers both a nonexistent id and an id owned by another tenant;
    /// the two are deliberately indistinguishable.
    #[error("Note not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] notable_db::DbError),
}

impl IntoResponse for ApiNotesError {
    fn into_response(self) -> Response {
        let (status, message, code) = match &self {
            ApiNotesError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            ApiNotesError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string(), None)
            }
            ApiNotesError::QuotaExceeded => (
                StatusCode::FORBIDDEN,
                "Note limit reached. Upgrade to Pro for unlimited notes.".to_string(),
                Some(NOTE_LIMIT_CODE.to_string()),
            ),
            ApiNotesError::NotFound => (StatusCode::NOT_FOUND, "Note not found".to_string(), None),
            ApiNotesError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_maps_to_403_with_code() {
        let response = ApiNotesError::QuotaExceeded.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiNotesError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiNotesError::Validation("Title is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quota_body_carries_machine_readable_code() {
        let body = ErrorBody {
            error: "Note limit reached. Upgrade to Pro for unlimited notes.".to_string(),
            code: Some(NOTE_LIMIT_CODE.to_string()),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("NOTE_LIMIT_REACHED"));
    }
}
