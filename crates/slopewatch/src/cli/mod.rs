//! Command-line interface for slopewatch.
//!
//! This module provides the CLI structure for the `slopewatch` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ActionsCommand, ClearCommand, ConfigCommand, DeleteCommand, HistoryCommand, OrderArg,
    RecordCommand, RiskLevelArg, RisksCommand, StatsCommand,
};

/// slopewatch - Environmental monitoring for landslide-prone areas
///
/// Record temperature, humidity, pressure and air quality readings, review
/// their history, and follow the mitigation checklist and risk areas.
#[derive(Debug, Parser)]
#[command(name = "slopewatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save a new environmental reading
    Record(RecordCommand),

    /// Show stored readings
    History(HistoryCommand),

    /// Delete one stored reading
    Delete(DeleteCommand),

    /// Delete all stored readings
    Clear(ClearCommand),

    /// Show averages over stored readings
    Stats(StatsCommand),

    /// Show the mitigation checklist
    Actions(ActionsCommand),

    /// Show monitored risk areas
    Risks(RisksCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
