//! Command-line interface for recipebox.
//!
//! This module provides the CLI structure and output rendering for the
//! `recipebox` binary.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    is_confirmed, AddCommand, ConfigCommand, EditCommand, ListCommand, OutputFormat,
    RecentCommand, RemoveCommand, SearchCommand, ShowCommand, StatusCommand,
};

/// recipebox - Keep your recipes in a plain text table
///
/// Browse, search, add, edit and delete recipes, and see what you looked at
/// most recently.
#[derive(Debug, Parser)]
#[command(name = "recipebox")]
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
    /// List recipes
    List(ListCommand),

    /// Search recipe names and ingredients
    Search(SearchCommand),

    /// Show a recipe and remember that it was viewed
    Show(ShowCommand),

    /// Add a new recipe
    Add(AddCommand),

    /// Edit an existing recipe
    Edit(EditCommand),

    /// Delete a recipe
    Remove(RemoveCommand),

    /// Show recently viewed recipes
    Recent(RecentCommand),

    /// List recipe categories
    Categories,

    /// Show store status
    Status(StatusCommand),

    /// View or check configuration
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
