use anyhow::{Context, Result};
use clap::Parser;
use loam_console_core::config::Config;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbosity level
    let cli = Cli::parse();

    // Initialize tracing with appropriate verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        2.. => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config =
        Config::discover(cli.config.as_deref()).context("failed to load console configuration")?;
    let app = commands::build_application(config, &cli.root);

    let tokens = if cli.command.is_empty() {
        vec!["list".to_string()]
    } else {
        cli.command.clone()
    };
    info!(command = %tokens[0], "dispatching");
    app.run(&tokens)
}
