//! HTTP handlers for note endpoints.
//!
//! - `list_notes_handler` - GET /notes
//! - `create_note_handler` - POST /notes
//! - `get_note_handler` - GET /notes/:id
//! - `update_note_handler` - PUT /notes/:id
//! - `delete_note_handler` - DELETE /notes/:id

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_note_handler;
pub use delete::delete_note_handler;
pub use get::get_note_handler;
pub use list::list_notes_handler;
pub use update::update_note_handler;
