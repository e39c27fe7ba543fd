//! Authentication API router configuration.
//!
//! Configures routes for the authentication endpoints:
//! - POST /auth/login

use crate::handlers::login_handler;
use crate::services::{AuthService, TokenService};
use axum::{routing::post, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the authentication routes.
#[derive(Clone)]
pub struct AuthState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Credential verification service.
    pub auth_service: Arc<AuthService>,
    /// Token issuance service.
    pub token_service: Arc<TokenService>,
}

impl AuthState {
    /// Create the auth state from a pool and token service.
    #[must_use]
    pub fn new(pool: PgPool, token_service: TokenService) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(pool.clone())),
            token_service: Arc::new(token_service),
            pool,
        }
    }
}

/// Create the authentication router.
///
/// Routes are unauthenticated; this is where tokens come from.
///
/// # Returns
///
/// A configured Axum router for the `/auth` prefix.
pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .layer(Extension(state.auth_service))
        .layer(Extension(state.token_service))
        .layer(Extension(state.pool))
}
