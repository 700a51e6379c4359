use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cp_coach::api::state::AppState;
use cp_coach::api::build_router;
use cp_coach::config::AppConfig;
use cp_coach::fetch::{Fetcher, FetcherConfig};
use cp_coach::registry::SessionRegistry;

#[derive(Parser)]
#[command(name = "cp-coach")]
#[command(about = "Competitive programming coach: roasts, recommendations, contests")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port number (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting cp-coach v{}", env!("CARGO_PKG_VERSION"));

    let config_path = Path::new(&cli.config);
    let mut config = if config_path.exists() {
        AppConfig::from_file(config_path)?
    } else {
        tracing::warn!("Config file {} not found, using defaults", cli.config);
        AppConfig::default()
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let fetcher = Fetcher::new(FetcherConfig {
        timeout: Duration::from_secs(config.fetch.timeout_seconds),
        user_agent: config.fetch.user_agent.clone(),
    })?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        fetcher: Arc::new(fetcher),
        registry: SessionRegistry::new(),
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Tool endpoints at http://{}/tools/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
