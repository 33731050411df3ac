mod calendar;
mod cli;
mod config;
mod decode;
mod error;
mod layout;
mod models;
mod overlay;
mod render;
mod source;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Loading config")?;

    match cli.command {
        Commands::Stats { input, json } => {
            handlers::handle_stats(&input, json)?;
        }
        Commands::Layout {
            input,
            output,
            with_stats,
        } => {
            handlers::handle_layout(&input, output.as_deref(), with_stats, &config)?;
        }
        Commands::Export { input } => {
            handlers::handle_export(&input)?;
        }
        Commands::Config { action } => {
            handlers::handle_config(&action, &config, cli.config.as_deref())?;
        }
    }

    Ok(())
}
