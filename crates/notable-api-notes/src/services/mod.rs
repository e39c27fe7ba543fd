//! Services for note operations.

pub mod note_service;

pub use note_service::{NoteService, FREE_PLAN_NOTE_LIMIT};
