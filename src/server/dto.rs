//! Response bodies

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Bundle status: ok, missing
    pub bundle: String,
    /// Directory the bundle is served from
    pub dist_dir: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// When the process started serving
    pub started_at: DateTime<Utc>,
    /// Application version
    pub version: String,
}
