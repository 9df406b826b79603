//! BrewLog - Coffee Brewing Tracker
//!
//! Command-line front end: wires the JSON-lines store into the brew service
//! and runs one command per invocation.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use brewlog_domain::BrewService;
use brewlog_store::JsonLinesRepository;
use clap::Parser;
use tracing::{debug, error};

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    config::init_tracing();

    let config = AppConfig::from_cli(&cli)?;
    debug!(data_dir = %config.data_dir.display(), low_supply_g = config.service.low_supply_threshold_g, "Loaded configuration");

    let repository = JsonLinesRepository::new(&config.data_dir);
    let service = BrewService::new(repository, config.service.clone());

    if let Err(err) = commands::run(&service, &config, cli.command).await {
        error!(error = %err, "Command failed");
        return Err(err);
    }

    Ok(())
}
