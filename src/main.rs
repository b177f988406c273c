//! geowall - Live satellite Earth wallpaper
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use geowall::cli::{Cli, Commands};
use geowall::config::ConfigManager;
use geowall::error::GeowallResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GeowallResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("geowall=warn"),
        1 => EnvFilter::new("geowall=info"),
        _ => EnvFilter::new("geowall=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let manager = if let Some(path) = cli.config.clone() {
        ConfigManager::with_path(path)
    } else {
        ConfigManager::new()
    };
    let config = manager.load().await?;

    // Dispatch to command; a bare invocation runs the poll loop
    match cli.command {
        None => geowall::cli::commands::run(Default::default(), &config).await,
        Some(Commands::Run(args)) => geowall::cli::commands::run(args, &config).await,
        Some(Commands::Config(args)) => {
            geowall::cli::commands::config(args, &config, &manager).await
        }
    }
}
