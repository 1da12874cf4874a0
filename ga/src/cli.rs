//! CLI argument parsing for gardenadvice

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ga")]
#[command(author, version, about = "Season and plant-type gardening tips", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Subcommand to run; none starts the interactive prompts
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print advice for a season and plant type without prompting
    Advise {
        /// Season name (summer, winter, spring or autumn)
        #[arg(required = true)]
        season: String,

        /// Plant type (flower, vegetable or succulent)
        #[arg(required = true)]
        plant_type: String,
    },

    /// List the seasons and plant types that have tips
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["ga"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_advise() {
        let cli = Cli::parse_from(["ga", "advise", "summer", "flower"]);
        if let Some(Command::Advise { season, plant_type }) = cli.command {
            assert_eq!(season, "summer");
            assert_eq!(plant_type, "flower");
        } else {
            panic!("Expected Advise command");
        }
    }

    #[test]
    fn test_cli_parse_advise_requires_both_args() {
        assert!(Cli::try_parse_from(["ga", "advise", "summer"]).is_err());
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["ga", "list"]);
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["ga", "-c", "/path/to/config.yml", "list"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from(["ga", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
