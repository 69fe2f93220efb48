//! Application state shared across handlers

use std::time::Instant;

use enrollctl_core::Registry;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state
///
/// The registry does no locking of its own. Every handler takes this mutex
/// for exactly one registry operation, which serializes concurrent requests.
pub struct AppState {
    registry: Mutex<Registry>,
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Wrap an already-populated registry (for testing)
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Mutex::new(registry),
            started_at: Instant::now(),
        }
    }

    pub async fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().await
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
