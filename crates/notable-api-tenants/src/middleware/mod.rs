//! Middleware components for the Tenants API.

pub mod admin_guard;

pub use admin_guard::admin_guard;
