//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `VELOCITY_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Compiled UI bundle location
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("./velocity-ui/dist")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            index_file: default_index_file(),
        }
    }
}

impl SiteConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Where `load_default` found its settings
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config came from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    /// Candidate files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Runs before logging is installed, so what happened is returned in the
    /// report instead of being logged here.
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("velocity").join("config.toml")),
            Some(PathBuf::from("/etc/velocity/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        let mut report = LoadReport::default();
        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        report.source = Some(path.clone());
                        return (config, report);
                    }
                    Err(e) => report.skipped.push(e),
                }
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("VELOCITY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("VELOCITY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dist) = lookup("VELOCITY_DIST_DIR") {
            self.site.dist_dir = PathBuf::from(dist);
        }
        if let Some(level) = lookup("VELOCITY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VELOCITY_LOG_FORMAT").as_deref().and_then(LogFormat::parse) {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Velocity Logic Site Configuration
#
# Environment variables override these settings:
# - VELOCITY_HOST
# - VELOCITY_PORT
# - VELOCITY_DIST_DIR
# - VELOCITY_LOG_LEVEL
# - VELOCITY_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8080

# Allowed CORS origins (empty: same-origin only)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[site]
# Directory holding the compiled UI bundle (trunk build output)
dist_dir = "./velocity-ui/dist"

# Entry document served for client-side routes
index_file = "index.html"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.site.index_path(), PathBuf::from("./velocity-ui/dist/index.html"));
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.index_file, "index.html");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/velocity.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("VELOCITY_HOST", "127.0.0.1"),
            ("VELOCITY_PORT", "3000"),
            ("VELOCITY_DIST_DIR", "/srv/velocity"),
            ("VELOCITY_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.site.dist_dir, PathBuf::from("/srv/velocity"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_override_values_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "VELOCITY_PORT" => Some("not-a-port".to_string()),
            "VELOCITY_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
