//! Geoscope Server: geophysical hazard aggregator
//!
//! Main entry point: loads configuration, initializes logging, and starts
//! the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use geoscope_core::config::{AppConfig, LoggingConfig};
use geoscope_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the environment overlay, and `GEOSCOPE__*`
/// variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GEOSCOPE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        earthquake_feed = %config.feeds.earthquake.base_url,
        volcano_feed = %config.feeds.volcano.base_url,
        wildfire_feed = %config.feeds.wildfire.base_url,
        timeout_seconds = config.feeds.request_timeout_seconds,
        "Starting Geoscope"
    );

    geoscope_api::run_server(config).await
}
