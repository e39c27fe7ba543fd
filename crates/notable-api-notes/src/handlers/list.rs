//! List notes endpoint handler.
//!
//! GET /notes - List the caller's tenant's notes, newest first.

use crate::error::ApiNotesError;
use crate::models::NoteResponse;
use crate::services::NoteService;
use axum::{Extension, Json};
use notable_auth::Claims;
use std::sync::Arc;

/// Lists all notes belonging to the authenticated caller's tenant.
#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Notes of the caller's tenant, newest first", body = [NoteResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Notes"
)]
pub async fn list_notes_handler(
    Extension(claims): Extension<Claims>,
    Extension(note_service): Extension<Arc<NoteService>>,
) -> Result<Json<Vec<NoteResponse>>, ApiNotesError> {
    let notes = note_service.list(claims.tenant_id()).await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}
