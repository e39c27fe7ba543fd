//! Services for tenant administration.

pub mod tenant_service;

pub use tenant_service::TenantService;
