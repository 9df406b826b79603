//! Application configuration
//!
//! Values come from flags, then the environment (a `.env` file is loaded
//! first), then defaults.

use std::path::PathBuf;

use anyhow::{bail, Result};
use brewlog_domain::ServiceConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub service: ServiceConfig,
    pub json: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.low_supply_g.is_finite() || cli.low_supply_g < 0.0 {
            bail!(
                "low supply threshold must be a non-negative number of grams, got {}",
                cli.low_supply_g
            );
        }

        Ok(Self {
            data_dir: cli.data_dir.clone(),
            service: ServiceConfig {
                low_supply_threshold_g: cli.low_supply_g,
            },
            json: cli.json,
        })
    }
}

/// Initialize tracing on stderr, leaving stdout to command output
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
