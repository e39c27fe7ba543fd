//! Demo-Data Bootstrap Module
//!
//! Seeds two demo tenants and four demo users when the service starts
//! with `SEED_DEMO_DATA=true`. All inserts are idempotent: rows that
//! already exist (by slug or email) are left untouched, so the bootstrap
//! can run on every startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notable_db::{seed_demo_data, SeedResult};
//!
//! let result = seed_demo_data(&pool, &demo_password_hash).await?;
//! if result.tenants_created > 0 {
//!     info!("Demo tenants created");
//! }
//! ```

mod demo_data;

pub use demo_data::{seed_demo_data, SeedResult};

use notable_core::UserRole;

/// Demo tenants seeded at startup: (slug, name).
pub const DEMO_TENANTS: [(&str, &str); 2] = [("acme", "Acme"), ("globex", "Globex")];

/// Demo users seeded at startup: (email, tenant slug, role).
///
/// All demo users share the password supplied to [`seed_demo_data`].
pub const DEMO_USERS: [(&str, &str, UserRole); 4] = [
    ("admin@acme.test", "acme", UserRole::Admin),
    ("member@acme.test", "acme", UserRole::Member),
    ("admin@globex.test", "globex", UserRole::Admin),
    ("member@globex.test", "globex", UserRole::Member),
];
