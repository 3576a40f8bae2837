use anyhow::Result;
use clap::Parser;

use nanoguide::cli::{Cli, Commands};
use nanoguide::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    cli.command.unwrap_or_default().execute(config)?;

    Ok(())
}
