//! OpenAPI documentation assembly.
//!
//! Serves the OpenAPI document at /api-docs/openapi.json and the Swagger
//! UI at /swagger-ui.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

/// The assembled OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notable API",
        description = "Multi-tenant notes service: authentication, tenant-scoped note CRUD, plan-based quotas."
    ),
    paths(
        notable_api_auth::handlers::login::login_handler,
        notable_api_notes::handlers::list::list_notes_handler,
        notable_api_notes::handlers::create::create_note_handler,
        notable_api_notes::handlers::get::get_note_handler,
        notable_api_notes::handlers::update::update_note_handler,
        notable_api_notes::handlers::delete::delete_note_handler,
        notable_api_tenants::handlers::upgrade::upgrade_tenant_handler,
    ),
    components(schemas(
        notable_api_auth::LoginRequest,
        notable_api_auth::TokenResponse,
        notable_api_auth::UserInfo,
        notable_api_notes::CreateNoteRequest,
        notable_api_notes::UpdateNoteRequest,
        notable_api_notes::NoteResponse,
        notable_api_tenants::TenantSummary,
        notable_api_tenants::UpgradeResponse,
        notable_core::UserRole,
        notable_core::TenantPlan,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Notes", description = "Tenant-scoped note CRUD"),
        (name = "Tenants", description = "Tenant administration"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token security scheme referenced by the handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Router serving the OpenAPI document and Swagger UI.
pub fn swagger_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
