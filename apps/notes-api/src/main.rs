//! Notable Notes API
//!
//! A multi-tenant notes service built with Axum. Provides authentication,
//! tenant-scoped note CRUD with plan-based quotas, tenant plan upgrade,
//! a health check and API documentation.

mod config;
mod health;
mod logging;
mod openapi;
mod state;

use axum::{middleware, routing::get, Extension, Router};
use config::Config;
use health::health_handler;
use notable_api_auth::{auth_router, jwt_auth_middleware, AuthState, JwtSecret, TokenConfig, TokenService};
use notable_api_notes::{notes_router, NotesState};
use notable_api_tenants::{tenants_router, TenantsState};
use openapi::swagger_routes;
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting Notable API"
    );

    // Create database connection pool
    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            info!("Database connection established");
            pool
        }
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    // Apply embedded migrations before serving traffic
    if let Err(e) = notable_db::run_migrations(&pool).await {
        eprintln!("FATAL: Database migration failed: {e}");
        std::process::exit(1);
    }

    // Optionally seed the demo tenants and users
    if config.seed_demo_data {
        let password_hash = match notable_auth::hash_password(&config.demo_password) {
            Ok(hash) => hash,
            Err(e) => {
                eprintln!("FATAL: Failed to hash demo password: {e}");
                std::process::exit(1);
            }
        };
        match notable_db::seed_demo_data(&pool, &password_hash).await {
            Ok(result) => {
                info!(
                    tenants_created = result.tenants_created,
                    users_created = result.users_created,
                    "Demo data bootstrap completed"
                );
            }
            Err(e) => {
                eprintln!("FATAL: Demo data bootstrap failed: {e}");
                std::process::exit(1);
            }
        }
    }

    // Create services and per-crate router states
    let token_service = TokenService::new(TokenConfig {
        secret: config.jwt_secret.clone(),
        issuer: "notable".to_string(),
    });
    let auth_state = AuthState::new(pool.clone(), token_service);
    let notes_state = NotesState::new(pool.clone());
    let tenants_state = TenantsState::new(pool.clone());
    let app_state = AppState::new();

    let cors = build_cors_layer(&config);
    let jwt_secret = JwtSecret(config.jwt_secret.clone());

    // Protected routers get the bearer-token middleware; the admin guard
    // inside the tenants router runs after it.
    let notes_routes = notes_router(notes_state)
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(jwt_secret.clone()));

    let tenants_routes = tenants_router(tenants_state)
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(jwt_secret));

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(app_state)
        .nest("/auth", auth_router(auth_state))
        .nest("/notes", notes_routes)
        .nest("/tenants", tenants_routes)
        .merge(swagger_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "Notable API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Shutdown complete");
}

/// Build the CORS layer from configuration.
///
/// The default configuration is permissive (any origin); deployments can
/// restrict it with `CORS_ORIGINS`.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
