//! Coilyard API Server
//!
//! Run with: cargo run --bin coilyard
//!
//! # Configuration
//!
//! Loaded from `config.toml` (current directory, `/etc/coilyard/`, or the
//! user config directory), with environment variable overrides:
//! - `COILYARD_DB_PATH`: Database file path
//! - `COILYARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COILYARD_API_PORT`: Port to listen on (default: 8090)
//! - `COILYARD_TIMEZONE`: Reference time zone for date stamps (default: Europe/Moscow)
//! - `COILYARD_LOG_LEVEL`: Log level (default: info)
//! - `COILYARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter override

use anyhow::Context;
use chrono_tz::Tz;
use coilyard::api::{serve, ApiConfig, AppState};
use coilyard::config::Config;
use coilyard::store::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Coilyard API server v{}", env!("CARGO_PKG_VERSION"));

    let zone: Tz = config
        .inventory
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown time zone {:?}", config.inventory.timezone))?;
    tracing::info!(zone = %zone, "reference time zone");

    let store = Arc::new(
        Store::open(&config.store.db_path)
            .with_context(|| format!("opening store at {}", config.store.db_path))?,
    );

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(store, api_config.clone(), zone);

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Coilyard API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` wins when set.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "coilyard={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
