use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use gardenadvice::advice;
use gardenadvice::cli::{Cli, Command};
use gardenadvice::config::Config;
use gardenadvice::shell;

fn setup_logging(cli_level: Option<&str>, config_level: Option<&str>) -> Result<()> {
    // Priority: --log-level > config file > INFO
    let level = match cli_level.or(config_level) {
        Some(s) => s.parse().unwrap_or_else(|_| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            log::LevelFilter::Info
        }),
        None => log::LevelFilter::Info,
    };

    env_logger::Builder::from_default_env().filter_level(level).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    if !config.color {
        colored::control::set_override(false);
    }

    info!("gardenadvice starting");

    match cli.command {
        Some(Command::Advise { season, plant_type }) => {
            println!("{}", advice::resolve(&season, &plant_type));
        }
        Some(Command::List) => cmd_list(),
        None => shell::run()?,
    }

    Ok(())
}

/// Print every season and plant type that has a tip
fn cmd_list() {
    println!("Seasons:");
    for season in advice::SEASONS {
        if let Some(tip) = advice::season_tip(season) {
            println!("  {:10} {}", season.cyan(), tip);
        }
    }

    println!();
    println!("Plant types:");
    for plant_type in advice::PLANT_TYPES {
        if let Some(tip) = advice::plant_tip(plant_type) {
            println!("  {:10} {}", plant_type.cyan(), tip);
        }
    }
}
