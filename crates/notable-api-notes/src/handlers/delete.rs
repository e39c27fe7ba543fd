//! Delete note endpoint handler.
//!
//! DELETE /notes/:id - Delete a note of the caller's tenant.

use crate::error::ApiNotesError;
use crate::services::NoteService;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Extension;
use notable_auth::Claims;
use notable_core::NoteId;
use std::sync::Arc;
use uuid::Uuid;

/// Deletes a note by id.
///
/// Repeating the delete yields 404; an id owned by another tenant yields
/// the same 404 as a nonexistent id.
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Note not found in the caller's tenant"),
    ),
    security(("bearerAuth" = [])),
    tag = "Notes"
)]
pub async fn delete_note_handler(
    Extension(claims): Extension<Claims>,
    Extension(note_service): Extension<Arc<NoteService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiNotesError> {
    note_service
        .delete(NoteId::from_uuid(id), claims.tenant_id())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    // Handler tests require a database-backed NoteService; covered by
    // integration tests.
}
