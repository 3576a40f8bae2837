use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::Difficulty;
use crate::commands::{browse, configure, favorites, generate, list, search};
use crate::config::Config;
use crate::controller::state::Section;

#[derive(Parser)]
#[command(name = "nanoguide")]
#[command(about = "A terminal guide and prompt toolkit for Nano Banana image editing")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive guide (the default)
    Browse(BrowseArgs),

    /// List the prompt database
    List(ListArgs),

    /// Search the prompt database
    Search(SearchArgs),

    /// Compose a prompt from the generator fields
    Generate(GenerateArgs),

    /// Manage favorite prompts
    Favorites(FavoritesArgs),

    /// Configuration management
    Config(ConfigArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Browse(BrowseArgs::default())
    }
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Browse(args) => browse::handle_browse_command(config, &args),
            Commands::List(args) => list::handle_list_command(config, &args),
            Commands::Search(args) => search::handle_search_command(config, &args),
            Commands::Generate(args) => generate::handle_generate_command(config, &args),
            Commands::Favorites(args) => favorites::handle_favorites_command(config, &args),
            Commands::Config(args) => configure::handle_config_command(config, &args.command),
        }
    }
}

#[derive(Args, Default)]
pub struct BrowseArgs {
    /// Section to open first
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by category id (basic/advanced/creative/professional)
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Filter by difficulty
    #[arg(short = 'd', long, value_enum)]
    pub difficulty: Option<Difficulty>,

    #[arg(short, long, value_enum, default_value = "simple")]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Simple,
    Detail,
    Json,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query matched against title, content, category name, and tags
    pub query: String,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub composition: Option<String>,

    #[arg(long)]
    pub action: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub style: Option<String>,

    #[arg(long)]
    pub editing: Option<String>,

    /// Copy the composed prompt to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Add the composed prompt to favorites
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

#[derive(Subcommand, Clone)]
pub enum FavoritesCommand {
    /// List favorite prompts
    List,

    /// Add a prompt to favorites
    Add { prompt: String },

    /// Remove a prompt from favorites
    Remove { prompt: String },

    /// Remove all favorites
    Clear,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let command = Commands::default();
        assert!(matches!(
            command,
            Commands::Browse(BrowseArgs { section: None })
        ));
    }

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::parse_from([
            "nanoguide",
            "generate",
            "--subject",
            "a cat",
            "--style",
            "watercolor",
            "--copy",
        ]);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.subject.as_deref(), Some("a cat"));
                assert_eq!(args.style.as_deref(), Some("watercolor"));
                assert!(args.copy);
                assert!(!args.favorite);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_list_args_parse() {
        let cli = Cli::parse_from(["nanoguide", "list", "-c", "basic", "-f", "json"]);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.category.as_deref(), Some("basic"));
                assert_eq!(args.format, ListFormat::Json);
            }
            _ => panic!("expected list command"),
        }
    }
}
