//! Velocity Site CLI
//!
//! - `velocity-site serve` - host the compiled UI bundle
//! - `velocity-site config` - print or write a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use velocity_site::config::{generate_default_config, Config, LoadReport};
use velocity_site::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "velocity-site")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Host for the Velocity Logic marketing site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled site
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding the compiled UI bundle
        #[arg(long)]
        dist: Option<PathBuf>,
    },

    /// Generate a default config file
    Config {
        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port, dist } => {
            let (mut config, report) = match config {
                Some(path) => {
                    let config = Config::load_with_env(&path)?;
                    let report = LoadReport {
                        source: Some(path),
                        ..LoadReport::default()
                    };
                    (config, report)
                }
                None => Config::load_default(),
            };

            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.site.dist_dir = dist;
            }

            velocity_site::logging::init(&config.logging);
            tracing::info!("Starting Velocity site v{}", env!("CARGO_PKG_VERSION"));
            for skipped in &report.skipped {
                tracing::warn!("{}", skipped);
            }
            match &report.source {
                Some(path) => tracing::info!("Loaded config from {:?}", path),
                None => tracing::info!("Using default config with environment overrides"),
            }

            serve(AppState::new(config.server, config.site)).await?;
        }

        Commands::Config { output } => {
            let template = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, template)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", template),
            }
        }
    }

    Ok(())
}
