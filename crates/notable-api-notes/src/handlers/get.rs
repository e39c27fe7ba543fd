//! Get note endpoint handler.
//!
//! GET /notes/:id - Fetch a single note of the caller's tenant.

use crate::error::ApiNotesError;
use crate::models::NoteResponse;
use crate::services::NoteService;
use axum::extract::Path;
use axum::{Extension, Json};
use notable_auth::Claims;
use notable_core::NoteId;
use std::sync::Arc;
use uuid::Uuid;

/// Fetches a single note by id.
///
/// An id owned by another tenant yields the same 404 as a nonexistent id.
#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 200, description = "The note", body = NoteResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Note not found in the caller's tenant"),
    ),
    security(("bearerAuth" = [])),
    tag = "Notes"
)]
pub async fn get_note_handler(
    Extension(claims): Extension<Claims>,
    Extension(note_service): Extension<Arc<NoteService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteResponse>, ApiNotesError> {
    let note = note_service
        .get(NoteId::from_uuid(id), claims.tenant_id())
        .await?;

    Ok(Json(NoteResponse::from(note)))
}

#[cfg(test)]
mod tests {
    // Handler tests require a database-backed NoteService; covered by
    // integration tests.
}
