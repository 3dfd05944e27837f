//! Jepto Site Host
//!
//! Command-line entry point:
//! - Serve the compiled site
//! - Print a default configuration file

use anyhow::Context;
use clap::{Parser, Subcommand};
use jepto::config::{generate_default_config, Config};
use jepto::server::{serve, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jepto")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Static host for the Jepto Enterprises site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled site
    Serve {
        /// Config file (default: search the standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory holding the compiled site
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Print a default config file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            dist,
        } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => Config::load_default(),
            };

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.site.dist_dir = dist;
            }

            jepto::logging::init(&config.logging);

            tracing::info!("Starting Jepto site host v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Site bundle: {:?}", config.site.dist_dir);

            serve(AppState::new(config.site), &config.server).await?;
        }
        Commands::Config => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}
