//! Request and response DTOs for note endpoints.

pub mod requests;
pub mod responses;

pub use requests::{CreateNoteRequest, UpdateNoteRequest};
pub use responses::NoteResponse;
