//! Database layer for Notable.
//!
//! Provides:
//! - Entity models (`Tenant`, `User`, `Note`) with static query methods
//! - Embedded SQL migrations
//! - Idempotent demo-data bootstrap
//!
//! Every note query carries the caller's tenant id in its predicate; the
//! models expose no unscoped accessor for tenant-owned rows.

pub mod bootstrap;
pub mod error;
pub mod migrations;
pub mod models;

// Re-export public API
pub use bootstrap::{seed_demo_data, SeedResult, DEMO_TENANTS, DEMO_USERS};
pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{Note, Tenant, User};
