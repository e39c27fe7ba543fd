//! HTTP handlers for authentication endpoints.
//!
//! - `login_handler` - POST /auth/login

pub mod login;

pub use login::login_handler;
