//! Main entry point for the application.
//!
//! This module loads environment variables, initializes logging, resolves the
//! configuration, seeds the user store and starts the HTTP API.
//!
//! The store is seeded either from a fixtures file or, with `--seed-defaults`,
//! from the built-in users. Any startup failure stops the process.

mod api;
mod cli;
mod config;
mod constants;
mod db;
mod errors;
mod utils;

use api::context::AppContext;
use clap::Parser;
use config::AppConfig;
use db::{MockDatabase, UserRepository};
use errors::Error;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Load environment variables from `.env`
/// 2. Parse CLI arguments (falling back to the environment)
/// 3. Initialize logging system
/// 4. Resolve configuration and validate the version file
/// 5. Seed the store and serve the API
#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &cli::Cli) -> Result<(), Error> {
    let config = AppConfig::from_cli(cli)?;

    let db: Arc<dyn UserRepository> = match &config.fixtures {
        Some(path) => Arc::new(db::load_fixtures(path)?),
        None => {
            info!("Seeding store with built-in users");
            Arc::new(MockDatabase::with_defaults()?)
        }
    };

    info!(
        "Starting {} {} in {} on port {}",
        constants::SERVICE_NAME,
        config.version,
        config.env,
        config.port
    );
    api::server::launch_server(AppContext::new(&config, db)).await
}
