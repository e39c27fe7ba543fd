//! Application state shared with handlers owned by the app itself.

use std::time::Instant;

/// State for app-level handlers (health).
///
/// Deliberately does not hold the database pool: the health probe does
/// not query storage, and every other route gets its services through
/// router-level extensions.
#[derive(Clone)]
pub struct AppState {
    /// Process start time, for uptime reporting.
    started_at: Instant,
}

impl AppState {
    /// Create the application state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Seconds since the process started.
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
