//! Response DTOs for note endpoints.

use chrono::{DateTime, Utc};
use notable_db::Note;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A note as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID.
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Creating user.
    pub user_id: Uuid,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            tenant_id: note.tenant_id,
            user_id: note.user_id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_note() {
        let note = Note {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "hello".to_string(),
            content: "world".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = NoteResponse::from(note.clone());
        assert_eq!(response.id, note.id);
        assert_eq!(response.tenant_id, note.tenant_id);
        assert_eq!(response.title, "hello");
        assert_eq!(response.content, "world");
    }
}
