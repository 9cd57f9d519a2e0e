//! HTTP server for the linear equation solver.
//!
//! Loads the optional YAML configuration, sets up logging, and serves the
//! solver API.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use equation_solver::api::{create_router, AppState};
use equation_solver::config::{ConfigLoader, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "equation-solver", author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML server configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,
}

/// Installs the global subscriber, appending to the configured log file if any.
fn init_logging(config: &ServerConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.try_init(),
    };
    installed.map_err(|e| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }

    init_logging(&config)?;

    let bind_address = config.bind_address.clone();
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Cannot bind {}", bind_address))?;
    info!(address = %bind_address, "Equation solver listening");

    axum::serve(listener, router).await?;
    Ok(())
}
