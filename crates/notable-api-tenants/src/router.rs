//! Tenants API router configuration.
//!
//! Configures routes for tenant administration:
//! - POST /tenants/:slug/upgrade
//!
//! The bearer-token middleware is attached by the application when the
//! router is mounted; the admin guard is layered here because every
//! route in this router is admin-only.

use crate::handlers::upgrade_tenant_handler;
use crate::middleware::admin_guard;
use crate::services::TenantService;
use axum::{middleware, routing::post, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared state for the tenant routes.
#[derive(Clone)]
pub struct TenantsState {
    /// Database connection pool.
    pub pool: PgPool,
    /// Tenant administration service.
    pub tenant_service: Arc<TenantService>,
}

impl TenantsState {
    /// Create the tenants state from a pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            tenant_service: Arc::new(TenantService::new(pool.clone())),
            pool,
        }
    }
}

/// Create the tenants router.
///
/// # Returns
///
/// A configured Axum router for the `/tenants` prefix.
pub fn tenants_router(state: TenantsState) -> Router {
    Router::new()
        .route("/:slug/upgrade", post(upgrade_tenant_handler))
        // Admin guard: non-admin callers get 403 regardless of slug
        .layer(middleware::from_fn(admin_guard))
        .layer(Extension(state.tenant_service))
        .layer(Extension(state.pool))
}
