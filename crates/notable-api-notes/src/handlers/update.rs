//! Update note endpoint handler.
//!
//! PUT /notes/:id - Update a note of the caller's tenant.

use crate::error::ApiNotesError;
use crate::models::{NoteResponse, UpdateNoteRequest};
use crate::services::NoteService;
use axum::extract::{FromRequest, Path, Request};
use axum::{Extension, Json};
use notable_auth::Claims;
use notable_core::NoteId;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Updates a note's title and content.
///
/// An id owned by another tenant yields the same 404 as a nonexistent id.
#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "The updated note", body = NoteResponse),
        (status = 400, description = "Title missing or empty"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Note not found in the caller's tenant"),
    ),
    security(("bearerAuth" = [])),
    tag = "Notes"
)]
pub async fn update_note_handler(
    Extension(claims): Extension<Claims>,
    Extension(note_service): Extension<Arc<NoteService>>,
    Path(id): Path<Uuid>,
    request: Request,
) -> Result<Json<NoteResponse>, ApiNotesError> {
    let Json(payload) = Json::<UpdateNoteRequest>::from_request(request, &())
        .await
        .map_err(|_| ApiNotesError::Validation("Title is required".to_string()))?;

    payload
        .validate()
        .map_err(|_| ApiNotesError::Validation("Title is required".to_string()))?;

    let note = note_service
        .update(
            NoteId::from_uuid(id),
            claims.tenant_id(),
            &payload.title,
            &payload.content,
        )
        .await?;

    Ok(Json(NoteResponse::from(note)))
}
