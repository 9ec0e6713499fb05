//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::browse::{Listing, SortOrder};
use crate::recipe::Recipe;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show recipes in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Sort names Z to A
    #[arg(short, long)]
    pub desc: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Build the listing query for these arguments.
    #[must_use]
    pub fn listing(&self) -> Listing {
        Listing {
            category: self.category.clone(),
            query: None,
            order: sort_order(self.desc),
        }
    }
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Text to look for in recipe names and ingredients
    pub query: String,

    /// Only show recipes in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Sort names Z to A
    #[arg(short, long)]
    pub desc: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Build the listing query for these arguments.
    #[must_use]
    pub fn listing(&self) -> Listing {
        Listing {
            category: self.category.clone(),
            query: Some(self.query.clone()),
            order: sort_order(self.desc),
        }
    }
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Recipe name
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Recipe name
    #[arg(short, long)]
    pub name: String,

    /// Recipe category
    #[arg(long)]
    pub category: String,

    /// Ingredient list
    #[arg(short, long)]
    pub ingredients: String,

    /// Preparation instructions
    #[arg(short = 's', long)]
    pub instructions: String,
}

/// Edit command arguments.
///
/// Fields that are not given keep their current value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Name of the recipe to edit
    pub name: String,

    /// Rename the recipe
    #[arg(short, long = "name")]
    pub new_name: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New ingredient list
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// New preparation instructions
    #[arg(short = 's', long)]
    pub instructions: Option<String>,
}

impl EditCommand {
    /// Merge the given fields over `current`.
    ///
    /// The result is trimmed like any new recipe but not validated; the store
    /// does that on update.
    #[must_use]
    pub fn apply(&self, current: &Recipe) -> Recipe {
        Recipe::new(
            self.new_name.as_deref().unwrap_or(&current.name),
            self.category.as_deref().unwrap_or(&current.category),
            self.ingredients.as_deref().unwrap_or(&current.ingredients),
            self.instructions.as_deref().unwrap_or(&current.instructions),
        )
    }

    /// Whether the edit gives the recipe a different name.
    #[must_use]
    pub fn renames(&self) -> bool {
        self.new_name
            .as_deref()
            .is_some_and(|n| n.trim() != self.name)
    }
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Name of the recipe to delete
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl RemoveCommand {
    /// Question asked before deleting.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete '{}'? (y/N) ", self.name)
    }
}

/// Whether a typed answer to a y/N prompt means yes.
///
/// Only `y` or `yes` in any case counts; an empty line is no.
#[must_use]
pub fn is_confirmed(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Recent command arguments.
#[derive(Debug, Args)]
pub struct RecentCommand {
    /// Forget all recent views
    #[arg(long)]
    pub clear: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

fn sort_order(desc: bool) -> SortOrder {
    if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}
