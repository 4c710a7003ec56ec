//! # MNPRO Node Runtime
//!
//! The entry point of the node.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`MNPRO_LOG_LEVEL` or `RUST_LOG`, default `info`)
//! 2. Resolve the network (`MNPRO_NETWORK`, `MNPRO_TESTNET`, `MNPRO_REGTEST`)
//! 3. Build and verify every network's parameters, then select the active one
//! 4. Log the active parameter summary

use anyhow::{Context, Result};
use chain_params::{params, select_params_from_env};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_LEVEL_VAR: &str = "MNPRO_LOG_LEVEL";

fn log_filter() -> EnvFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter())
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Resolve and select the network
    let network =
        select_params_from_env().context("Failed to select the network from the environment")?;
    info!("[node] running on {} network", network);

    let active = params();
    let summary = serde_json::to_string_pretty(&active.summary())
        .context("Failed to serialize parameter summary")?;
    info!("[node] active chain parameters:\n{}", summary);

    Ok(())
}
