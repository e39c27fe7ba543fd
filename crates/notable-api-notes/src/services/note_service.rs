//! Note service: tenant-scoped CRUD with plan-quota enforcement.

use crate::error::ApiNotesError;
use notable_core::{NoteId, TenantId, TenantPlan, UserId};
use notable_db::Note;
use sqlx::PgPool;

/// Maximum number of notes a FREE-plan tenant may hold.
pub const FREE_PLAN_NOTE_LIMIT: i64 = 3;

/// Service for note operations.
///
/// Every method takes the caller's `TenantId` and forwards it into the
/// query predicate; there is no way to reach another tenant's rows.
#[derive(Clone)]
pub struct NoteService {
    pool: PgPool,
}

impl NoteService {
    /// Create a new note service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Evaluate the plan quota for a creation attempt.
    ///
    /// FREE tenants are rejected at [`FREE_PLAN_NOTE_LIMIT`] existing
    /// notes; PRO tenants have no ceiling.
    ///
    /// # Errors
    ///
    /// Returns `ApiNotesError::QuotaExceeded` when the cap is hit.
    pub fn check_note_quota(plan: TenantPlan, current_count: i64) -> Result<(), ApiNotesError> {
        if plan.is_free() && current_count >= FREE_PLAN_NOTE_LIMIT {
            return Err(ApiNotesError::QuotaExceeded);
        }
        Ok(())
    }

    /// List all notes of the tenant, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiNotesError::Database` on storage failure.
    pub async fn list(&self, tenant_id: TenantId) -> Result<Vec<Note>, ApiNotesError> {
        Ok(Note::list_for_tenant(&self.pool, tenant_id).await?)
    }

    /// Create a note on behalf of a user.
    ///
    /// For FREE tenants the current note count is read fresh and checked
    /// against the cap before inserting. The count and the insert are two
    /// separate statements; concurrent creations can transiently exceed
    /// the cap by the size of the race window.
    ///
    /// # Errors
    ///
    /// - `ApiNotesError::QuotaExceeded` when a FREE tenant is at the cap
    /// - `ApiNotesError::Database` on storage failure
    pub async fn create(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        plan: TenantPlan,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiNotesError> {
        if plan.is_free() {
            let count = Note::count_for_tenant(&self.pool, tenant_id).await?;
            Self::check_note_quota(plan, count)?;
        }

        let note = Note::create(&self.pool, tenant_id, user_id, title, content).await?;

        tracing::info!(
            note_id = %note.id,
            tenant_id = %tenant_id,
            user_id = %user_id,
            "Note created"
        );

        Ok(note)
    }

    /// Fetch a single note by id within the tenant.
    ///
    /// # Errors
    ///
    /// Returns `ApiNotesError::NotFound` when no row matches the
    /// id + tenant predicate (nonexistent or cross-tenant alike).
    pub async fn get(&self, id: NoteId, tenant_id: TenantId) -> Result<Note, ApiNotesError> {
        Note::find_for_tenant(&self.pool, id, tenant_id)
            .await?
            .ok_or(ApiNotesError::NotFound)
    }

    /// Update a note's title and content within the tenant.
    ///
    /// # Errors
    ///
    /// Returns `ApiNotesError::NotFound` when no row matches the
    /// id + tenant predicate.
    pub async fn update(
        &self,
        id: NoteId,
        tenant_id: TenantId,
        title: &str,
        content: &str,
    ) -> Result<Note, ApiNotesError> {
        Note::update_for_tenant(&self.pool, id, tenant_id, title, content)
            .await?
            .ok_or(ApiNotesError::NotFound)
    }

    /// Delete a note by id within the tenant.
    ///
    /// Deleting an already-deleted note reports 404 on the repeat.
    ///
    /// # Errors
    ///
    /// Returns `ApiNotesError::NotFound` when nothing was deleted.
    pub async fn delete(&self, id: NoteId, tenant_id: TenantId) -> Result<(), ApiNotesError> {
        let deleted = Note::delete_for_tenant(&self.pool, id, tenant_id).await?;
        if deleted == 0 {
            return Err(ApiNotesError::NotFound);
        }

        tracing::info!(note_id = %id, tenant_id = %tenant_id, "Note deleted");
        Ok(())
    }
}
