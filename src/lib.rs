//! # Velocity Site
//!
//! Host for the Velocity Logic marketing site. Serves the compiled Leptos
//! bundle from `velocity-ui/`, answers client-side routes with the entry
//! document, and exposes health probes.
//!
//! ## Modules
//!
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: tracing subscriber setup
//! - [`server`]: Axum router, handlers and graceful shutdown
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use velocity_site::{config::Config, server::{serve, AppState}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _report) = Config::load_default();
//!     velocity_site::logging::init(&config.logging);
//!
//!     serve(AppState::new(config.server, config.site)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logging;
pub mod server;

pub use config::{
    generate_default_config, Config, ConfigError, LoadReport, LogFormat, LoggingConfig,
    ServerConfig, SiteConfig,
};
pub use server::{build_router, serve, AppState, ServerError, ServerResult};
