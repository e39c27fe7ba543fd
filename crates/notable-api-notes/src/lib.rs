//! Note CRUD API endpoints for Notable.
//!
//! This crate provides the tenant-scoped note resource:
//! - GET /notes - list the caller's tenant's notes, newest first
//! - POST /notes - create a note (quota-checked on FREE tenants)
//! - GET /notes/:id - fetch one note
//! - PUT /notes/:id - update a note
//! - DELETE /notes/:id - delete a note
//!
//! Every storage operation carries the caller's tenant id in its
//! predicate. A note that exists under another tenant is reported
//! exactly like a note that does not exist at all.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export public API
pub use error::ApiNotesError;
pub use models::{CreateNoteRequest, NoteResponse, UpdateNoteRequest};
pub use router::{notes_router, NotesState};
pub use services::{NoteService, FREE_PLAN_NOTE_LIMIT};
