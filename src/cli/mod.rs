//! Command-line interface definitions.

pub mod banner;
pub mod check;
pub mod menu;
pub mod migrate;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod run;
pub mod tables;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Roster - interactive department, role, and employee tracking.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (foreground)
    Run(RunArgs),

    /// Apply pending database migrations and exit
    Migrate(MigrateArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `roster check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override database path
    #[arg(long)]
    pub database: Option<String>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Skip ASCII art banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Arguments for the `migrate` subcommand.
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override database path
    #[arg(long)]
    pub database: Option<String>,
}
