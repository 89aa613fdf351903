//! Command-line interface for seva.
//!
//! This module provides the CLI structure for the `seva` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, CategoryArg, ConfigCommand, EditCommand, ListCommand, NgoArgs, OutputFormat,
    RemoveCommand, ShowCommand, StatsCommand, StatusArg, StatusCommand, UrgencyArg,
};

use crate::logging::Verbosity;

/// seva - Match donors with the material needs NGOs post
///
/// NGOs post donation requests; donors browse the active ones. Every change
/// is saved to a local database immediately.
#[derive(Debug, Parser)]
#[command(name = "seva")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
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
    /// List donation requests
    List(ListCommand),

    /// Show one donation request
    Show(ShowCommand),

    /// Post a new donation request
    Add(AddCommand),

    /// Edit a donation request
    Edit(EditCommand),

    /// Mark a request active, completed or cancelled
    Status(StatusCommand),

    /// Delete a donation request
    Remove(RemoveCommand),

    /// Show donor or NGO dashboard counts
    Stats(StatsCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
