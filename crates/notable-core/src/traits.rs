//! Multi-Tenant Traits
//!
//! # Example
//!
//! ```
//! use notable_core::{TenantAware, TenantId};
//!
//! struct Document {
//!     tenant_id: TenantId,
//!     title: String,
//! }
//!
//! impl TenantAware for Document {
//!     fn tenant_id(&self) -> TenantId {
//!         self.tenant_id
//!     }
//! }
//! ```

use crate::ids::TenantId;

/// Trait for entities that belong to a specific tenant.
///
/// Implementing this trait marks an entity as tenant-scoped. Every query
/// touching such an entity must carry its tenant id in the predicate;
/// the trait gives generic code a uniform way to read it.
pub trait TenantAware {
    /// Returns the tenant ID associated with this entity.
    ///
    /// Returns an owned `TenantId` (which is `Copy`) for convenience.
    fn tenant_id(&self) -> TenantId;
}
