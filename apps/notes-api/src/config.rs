//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error message.
//!
//! The JWT signing secret is required and has no fallback. A deployment
//! that forgets to set it does not start.

use std::env;
use thiserror::Error;

/// Minimum accepted length for the JWT signing secret, in bytes.
const MIN_JWT_SECRET_LEN: usize = 32;

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Shared HS256 signing secret. Required, no insecure default.
    pub jwt_secret: String,
    /// Log filter directive (e.g. "info,notable=debug").
    pub rust_log: String,
    /// Allowed CORS origins. `["*"]` means any origin.
    pub cors_origins: Vec<String>,
    /// Whether to seed demo tenants and users at startup.
    pub seed_demo_data: bool,
    /// Password shared by the demo accounts.
    pub demo_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required variables
    ///
    /// - `DATABASE_URL` - PostgreSQL connection string
    /// - `JWT_SECRET` - token signing secret, at least 32 bytes
    ///
    /// # Optional variables
    ///
    /// - `HOST` (default "0.0.0.0"), `PORT` (default 8080)
    /// - `RUST_LOG` (default "info")
    /// - `CORS_ORIGINS` - comma-separated origins (default "*")
    /// - `SEED_DEMO_DATA` - "true" to seed demo accounts (default false)
    /// - `DEMO_PASSWORD` - password for demo accounts (default "password")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a
    /// value fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;

        let jwt_secret = require_var("JWT_SECRET")?;
        validate_jwt_secret(&jwt_secret)?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let cors_origins = parse_cors_origins(env::var("CORS_ORIGINS").ok().as_deref());

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let demo_password = env::var("DEMO_PASSWORD").unwrap_or_else(|_| "password".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            jwt_secret,
            rust_log,
            cors_origins,
            seed_demo_data,
            demo_password,
        })
    }

    /// Returns `true` when any origin is allowed.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}

/// Reject secrets too short to resist brute force.
fn validate_jwt_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_JWT_SECRET_LEN {
        return Err(ConfigError::InvalidValue {
            var: "JWT_SECRET".to_string(),
            message: format!("must be at least {MIN_JWT_SECRET_LEN} bytes"),
        });
    }
    Ok(())
}

/// Split a comma-separated origin list; unset or empty means any origin.
fn parse_cors_origins(value: Option<&str>) -> Vec<String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => vec!["*".to_string()],
    }
}
