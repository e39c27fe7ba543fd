//! Request DTOs for note endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Create-note request payload.
///
/// `content` is optional and defaults to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title. Required, non-empty.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Note body.
    #[serde(default)]
    pub content: String,
}

/// Update-note request payload. Same shape as creation: the title is
/// required on every update, the content defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteRequest {
    /// Note title. Required, non-empty.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Note body.
    #[serde(default)]
    pub content: String,
}
