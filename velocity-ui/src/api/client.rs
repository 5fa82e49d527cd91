//! Supabase REST Client
//!
//! Insert-only access to the hosted Postgres tables through PostgREST.
//! The site never reads, updates or deletes rows.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

/// Analytics event table
pub const ANALYTICS_EVENTS_TABLE: &str = "analytics_events";

/// Waitlist table
pub const WAITLIST_TABLE: &str = "waitlist";

/// Substituted when `VELOCITY_SUPABASE_URL` is not set at build time
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// Substituted when `VELOCITY_SUPABASE_ANON_KEY` is not set at build time
pub const PLACEHOLDER_KEY: &str = "placeholder";

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Read credentials baked into the bundle at compile time
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("VELOCITY_SUPABASE_URL"),
            option_env!("VELOCITY_SUPABASE_ANON_KEY"),
        )
    }

    /// Fill in placeholders for missing values. Never fails; the inserts
    /// against a placeholder host will fail later and be handled there.
    pub fn resolve(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = url.map(str::trim).filter(|s| !s.is_empty());
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty());

        if url.is_none() || anon_key.is_none() {
            tracing::warn!("Missing Supabase environment variables, using placeholder backend");
        }

        Self {
            url: url
                .unwrap_or(PLACEHOLDER_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: anon_key.unwrap_or(PLACEHOLDER_KEY).to_string(),
        }
    }

    /// Whether real credentials are configured
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_URL || self.anon_key == PLACEHOLDER_KEY
    }

    /// PostgREST endpoint for a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

/// Errors from the remote store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Insert rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Request build error: {0}")]
    Encode(String),
}

/// PostgREST error body
#[derive(Debug, serde::Deserialize)]
struct PostgrestError {
    #[serde(default)]
    message: Option<String>,
}

/// Append-only remote collection access
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Insert `rows` (a JSON array of objects) into `table`
    async fn insert(&self, table: &str, rows: Value) -> Result<(), StoreError>;
}

/// Production client talking to Supabase over HTTP
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl RemoteStore for SupabaseClient {
    async fn insert(&self, table: &str, rows: Value) -> Result<(), StoreError> {
        let response = Request::post(&self.config.table_url(table))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
            .header("Prefer", "return=minimal")
            .json(&rows)
            .map_err(|e| StoreError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<PostgrestError>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| response.status_text());
            return Err(StoreError::Rejected { status, message });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_fall_back_to_placeholders() {
        let config = SupabaseConfig::resolve(None, None);
        assert_eq!(config.url, PLACEHOLDER_URL);
        assert_eq!(config.anon_key, PLACEHOLDER_KEY);
        assert!(config.is_placeholder());

        let config = SupabaseConfig::resolve(Some("  "), Some("key"));
        assert_eq!(config.url, PLACEHOLDER_URL);
        assert_eq!(config.anon_key, "key");
    }

    #[test]
    fn test_table_url() {
        let config = SupabaseConfig::resolve(Some("https://abc.supabase.co/"), Some("anon"));
        assert!(!config.is_placeholder());
        assert_eq!(
            config.table_url(WAITLIST_TABLE),
            "https://abc.supabase.co/rest/v1/waitlist"
        );
    }
}
