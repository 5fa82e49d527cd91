//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{ServerConfig, SiteConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Listener configuration
    pub server: Arc<ServerConfig>,
    /// Bundle location
    pub site: Arc<SiteConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start, reported by `/health`
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(server: ServerConfig, site: SiteConfig) -> Self {
        Self {
            server: Arc::new(server),
            site: Arc::new(site),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn index_path(&self) -> PathBuf {
        self.site.index_path()
    }

    /// Whether the entry document is on disk
    pub async fn bundle_present(&self) -> bool {
        tokio::fs::metadata(self.index_path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}
