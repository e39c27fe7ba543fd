//! Login endpoint handler.
//!
//! POST /auth/login - Authenticate user and issue a bearer token.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, TokenResponse, UserInfo};
use crate::services::{AuthService, TokenService};
use axum::extract::{FromRequest, Request};
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

/// Handle user login.
///
/// Authenticates the user with email and password and issues a signed
/// bearer token embedding the full identity (user, role, tenant, plan).
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Extension(token_service): Extension<Arc<TokenService>>,
    request: Request,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    // Extract the body manually so a missing field maps to 400, not the
    // extractor's default 422.
    let Json(payload) = Json::<LoginRequest>::from_request(request, &())
        .await
        .map_err(|_| ApiAuthError::Validation("Email and password are required".to_string()))?;

    payload.validate().map_err(|e| {
        let errors: Vec<String> = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
            })
            .collect();
        ApiAuthError::Validation(errors.join(", "))
    })?;

    let (user, tenant) = auth_service.login(&payload.email, &payload.password).await?;
    let token = token_service.issue(&user, &tenant)?;

    tracing::info!(
        user_id = %user.id,
        tenant_id = %user.tenant_id,
        "Login succeeded, token issued"
    );

    Ok(Json(TokenResponse {
        token,
        user: UserInfo::from_user_and_tenant(&user, &tenant),
    }))
}
