use anyhow::{Context, Result};

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::utils::{print_success, OutputStyle};

pub fn handle_config_command(config: Config, command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            OutputStyle::print_header("Configuration");
            let content =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            println!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", Config::config_file_path().display());
        }
        ConfigCommand::Reset => {
            Config::default().save()?;
            print_success("Configuration reset to defaults");
        }
    }

    Ok(())
}
