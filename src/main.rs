//! HTTP server for the promotion statistics service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use promotion_stats::api::{AppState, create_router};
use promotion_stats::config::ConfigLoader;
use promotion_stats::snapshot::JsonFileSnapshot;

/// Serves promotion eligibility statistics over a JSON employee snapshot.
#[derive(Parser, Debug)]
#[command(name = "promotion-stats", version, about)]
struct Cli {
    /// Path to the service configuration file
    #[arg(
        short,
        long,
        env = "PROMOTION_STATS_CONFIG",
        default_value = "./config/service.yaml"
    )]
    config: PathBuf,

    /// Address to listen on, overriding the configuration file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(bind) = cli.bind {
        loader = loader.with_bind_address(bind);
    }
    let config = loader.config();

    init_logging(&config.logging.level)?;

    let snapshot = JsonFileSnapshot::new(&config.snapshot.path);
    let router = create_router(AppState::new(snapshot));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;

    info!(
        bind_address = %config.server.bind_address,
        snapshot = %config.snapshot.path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Promotion statistics service listening"
    );

    axum::serve(listener, router)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
