//! Solution commands

use clap::Subcommand;

pub mod status;

#[derive(Debug, Subcommand)]
pub enum SolutionCommand {
    /// Get the installation/upload status of a solution
    Status(status::StatusArgs),
}
