//! Command-line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommand;
use crate::commands::objstore::ObjstoreCommand;
use crate::commands::solution::SolutionCommand;
use crate::logs::LogLevel;
use crate::utils::version_string;

#[derive(Debug, Parser)]
#[command(
    name = "objctl",
    bin_name = "objctl",
    version = version_string(),
    about = "Manage layered objects and solution status in the object store",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file [default: $OBJCTL_CONFIG or ~/.objctl/config.json]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Context to use instead of the current one
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Verbose output, same as --log-level=debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl Cli {
    /// Effective log level: flags first, then the settings file
    pub fn log_level(&self, configured: Option<LogLevel>) -> LogLevel {
        self.log_level
            .or(self.verbose.then_some(LogLevel::Debug))
            .or(configured)
            .unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Object store operations
    #[command(subcommand)]
    Objstore(ObjstoreCommand),

    /// Solution operations
    #[command(subcommand)]
    Solution(SolutionCommand),

    /// Manage contexts in the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}
