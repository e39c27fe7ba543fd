//! Tenant administration endpoints for Notable.
//!
//! This crate provides the tenant plan upgrade:
//! - POST /tenants/:slug/upgrade - upgrade the caller's own tenant to PRO
//!
//! The route requires the ADMIN role and rejects cross-tenant upgrades:
//! the slug in the path must equal the caller's own tenant slug, even
//! for admins.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

// Re-export public API
pub use error::TenantError;
pub use middleware::admin_guard;
pub use models::{TenantSummary, UpgradeResponse};
pub use router::{tenants_router, TenantsState};
pub use services::TenantService;
