//! Nightqueue - Nightbot request queue
//!
//! Main entry point for the Nightqueue CLI and server.

mod cli;
mod server;

use clap::Parser;
use tracing::warn;

use nightqueue_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands, RunArgs};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = ConfigLoader::resolve(cli.config.as_deref())?;

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            args.apply(&mut config);
            init_tracing(&config.logging)?;

            let warnings = ConfigValidator::validate(&config).into_result()?;
            for warning in warnings {
                warn!("Config {}: {}", warning.path, warning.message);
            }

            run_server(config).await
        }
        Commands::CheckConfig => {
            let result = ConfigValidator::validate(&config);
            for warning in &result.warnings {
                eprintln!("warning: {}: {}", warning.path, warning.message);
            }
            for error in &result.errors {
                eprintln!("error: {}: {}", error.path, error.message);
            }

            print!("{}", config.to_toml_string()?);
            result.into_result()?;
            Ok(())
        }
    }
}
