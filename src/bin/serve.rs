//! Demo server over the seeded fixture data
//!
//! Optionally pass a YAML config path as the first argument:
//!
//! ```text
//! serve [config.yaml]
//! ```

use anyhow::Result;
use backoffice::config::AdminConfig;
use backoffice::server::{AppState, build_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => AdminConfig::from_yaml_file(&path)?,
        None => AdminConfig::default(),
    };

    let state = if config.seed_demo_data {
        AppState::seeded(config.clone())
    } else {
        AppState::empty(config.clone())
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, seeded = config.seed_demo_data, "admin API listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
