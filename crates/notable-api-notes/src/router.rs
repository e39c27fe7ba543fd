//! Notes API router configuration.
//!
//! Configures routes for the note endpoints:
//! - GET /notes
//! - POST /notes
//! - GET /notes/:id
//! - PUT /notes/:id
//! - DELETE /notes/:id
//!
//! The bearer-token middleware is attached by the application when the
//! router is mounted; every route here assumes verified `Claims` in the
//! request extensions.

use crate::handlers::{
    create_note_handler, delete_note_handler, get_note_handler, list_notes_handler,
    update_note_handler,
};
use crate::services::NoteService;
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the note routes.
#[derive(Clone)]
pub struct NotesState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Note CRUD service.
    pub note_service: Arc<NoteService>,
}

impl NotesState {
    /// Create the notes state from a pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            note_service: Arc::new(NoteService::new(pool.clone())),
            pool,
        }
    }
}

/// Create the notes router.
///
/// # Returns
///
/// A configured Axum router for the `/notes` prefix.
pub fn notes_router(state: NotesState) -> Router {
    Router::new()
        .route("/", get(list_notes_handler))
        .route("/", post(create_note_handler))
        .route("/:id", get(get_note_handler))
        .route("/:id", put(update_note_handler))
        .route("/:id", delete(delete_note_handler))
        .layer(Extension(state.note_service))
        .layer(Extension(state.pool))
}
