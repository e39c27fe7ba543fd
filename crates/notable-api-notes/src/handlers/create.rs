//! Create note endpoint handler.
//!
//! POST /notes - Create a note, quota-checked on FREE tenants.

use crate::error::ApiNotesError;
use crate::models::{CreateNoteRequest, NoteResponse};
use crate::services::NoteService;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::{Extension, Json};
use notable_auth::Claims;
use std::sync::Arc;
use validator::Validate;

/// Creates a note on behalf of the authenticated caller.
///
/// For FREE-plan tenants the current note count is read fresh and checked
/// against the cap; the 4th note (3 existing) is rejected with the
/// machine-readable code `NOTE_LIMIT_REACHED`.
#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Title missing or empty"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "FREE-plan note limit reached"),
    ),
    security(("bearerAuth" = [])),
    tag = "Notes"
)]
pub async fn create_note_handler(
    Extension(claims): Extension<Claims>,
    Extension(note_service): Extension<Arc<NoteService>>,
    request: Request,
) -> Result<(StatusCode, Json<NoteResponse>), ApiNotesError> {
    let Json(payload) = Json::<CreateNoteRequest>::from_request(request, &())
        .await
        .map_err(|_| ApiNotesError::Validation("Title is required".to_string()))?;

    payload
        .validate()
        .map_err(|_| ApiNotesError::Validation("Title is required".to_string()))?;

    let user_id = claims.user_id().ok_or(ApiNotesError::Unauthorized)?;

    let note = note_service
        .create(
            claims.tenant_id(),
            user_id,
            claims.tenant_plan,
            &payload.title,
            &payload.content,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}
