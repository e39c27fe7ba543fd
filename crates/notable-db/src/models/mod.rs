//! Entity models with static query methods.
//!
//! Each model owns its SQL: query methods are associated functions taking
//! a `&PgPool`. Tenant-owned entities (`Note`) only expose tenant-scoped
//! queries.

pub mod note;
pub mod tenant;
pub mod user;

pub use note::Note;
pub use tenant::Tenant;
pub use user::User;
