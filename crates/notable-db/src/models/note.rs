//! Note entity model.
//!
//! Every query method takes the caller's `TenantId` and includes it in the
//! predicate. There is no unscoped accessor: cross-tenant reads, updates
//! and deletes are structurally impossible even when the caller supplies
//! another tenant's note id.

use chrono::{DateTime, Utc};
use notable_core::{NoteId, TenantAware, TenantId, UserId};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A note owned by a tenant.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    /// Unique identifier for the note.
    pub id: Uuid,

    /// The tenant this note belongs to.
    pub tenant_id: Uuid,

    /// The user who created the note.
    pub user_id: Uuid,

    /// Note title. Never empty.
    pub title: String,

    /// Note body. Defaults to the empty string.
    pub content: String,

    /// When the note was created.
    pub created_at: DateTime<Utc>,

    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Lists all notes of a tenant, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn list_for_tenant(pool: &PgPool, tenant_id: TenantId) -> Result<Vec<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, tenant_id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(tenant_id.as_uuid())
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Counts the notes of a tenant.
    ///
    /// Read fresh per request; the quota check deliberately has no cached
    /// counter and no atomic increment-and-check.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn count_for_tenant(pool: &PgPool, tenant_id: TenantId) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM notes
            WHERE tenant_id = $1
            ",
        )
        .bind(tenant_id.as_uuid())
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new note for a tenant and returns the created row.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the insert fails.
    pub async fn create(
        pool: &PgPool,
        tenant_id: TenantId,
        user_id: UserId,
        title: &str,
        content: &str,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            INSERT INTO notes (tenant_id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tenant_id, user_id, title, content, created_at, updated_at
            ",
        )
        .bind(tenant_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(title)
        .bind(content)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a single note by id within a tenant.
    ///
    /// Returns `None` both when the id does not exist and when it belongs
    /// to another tenant; callers report the two identically.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the query fails.
    pub async fn find_for_tenant(
        pool: &PgPool,
        id: NoteId,
        tenant_id: TenantId,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            SELECT id, tenant_id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = $1 AND tenant_id = $2
            ",
        )
        .bind(id.as_uuid())
        .bind(tenant_id.as_uuid())
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Updates a note's title and content within a tenant.
    ///
    /// Returns the updated row, or `None` when no row matches the
    /// id + tenant predicate.
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the update fails.
    pub async fn update_for_tenant(
        pool: &PgPool,
        id: NoteId,
        tenant_id: TenantId,
        title: &str,
        content: &str,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r"
            UPDATE notes
            SET title = $3, content = $4, updated_at = now()
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, user_id, title, content, created_at, updated_at
            ",
        )
        .bind(id.as_uuid())
        .bind(tenant_id.as_uuid())
        .bind(title)
        .bind(content)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Deletes a note by id within a tenant.
    ///
    /// Returns the number of rows deleted (0 when nothing matched).
    ///
    /// # Errors
    ///
    /// Returns `DbError::QueryFailed` if the delete fails.
    pub async fn delete_for_tenant(
        pool: &PgPool,
        id: NoteId,
        tenant_id: TenantId,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            r"
            DELETE FROM notes
            WHERE id = $1 AND tenant_id = $2
            ",
        )
        .bind(id.as_uuid())
        .bind(tenant_id.as_uuid())
        .execute(pool)
        .await
        .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected())
    }
}

impl TenantAware for Note {
    fn tenant_id(&self) -> TenantId {
        TenantId::from_uuid(self.tenant_id)
    }
}
