//! Health check endpoint.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Liveness/readiness probe.
///
/// Reports process health and uptime. Deliberately does not query the
/// database: a slow storage backend should not flap the liveness probe.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
