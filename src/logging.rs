//! Logging Setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate with request traces from `tower_http` at debug.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(level: &str) -> String {
    format!("velocity_site={},tower_http=debug", level)
}

/// Install the global subscriber
pub fn init(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(&logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        let directive = default_directive("info");
        assert_eq!(directive, "velocity_site=info,tower_http=debug");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }
}
