//! Authentication API endpoints for Notable.
//!
//! This crate provides:
//! - Login (POST /auth/login)
//! - The bearer-token middleware protecting every other route
//!
//! # Example
//!
//! ```rust,ignore
//! use notable_api_auth::{auth_router, AuthState};
//! use axum::Router;
//!
//! let app = Router::new().nest("/auth", auth_router(state));
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

// Re-export public API
pub use error::{ApiAuthError, ErrorBody};
pub use middleware::{jwt_auth_middleware, JwtSecret};
pub use models::{LoginRequest, TokenResponse, UserInfo};
pub use router::{auth_router, AuthState};
pub use services::{AuthService, TokenConfig, TokenService};
