//! Error types for recipebox.
//!
//! This module defines all error types used throughout the recipebox crate.
//! Validation errors carry the exact message shown to the user.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for recipebox operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// One or more recipe fields were empty.
    #[error("All fields must be filled.")]
    EmptyField,

    /// A new recipe used a name that is already taken.
    #[error("Recipe name already exists.")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// An edit tried to rename a recipe onto an existing one.
    #[error("New recipe name already exists.")]
    RenameConflict {
        /// The conflicting name.
        name: String,
    },

    /// No recipe exists with the given name.
    #[error("recipe not found: '{name}'")]
    NotFound {
        /// The requested name.
        name: String,
    },

    /// The category is not one of the configured categories.
    #[error("unknown category '{category}' (expected one of: {allowed})")]
    UnknownCategory {
        /// The rejected category.
        category: String,
        /// Comma-separated list of accepted categories.
        allowed: String,
    },

    // === Table Errors ===
    /// Failed to read or write a delimited table.
    #[error("failed to access table {path}: {source}")]
    Table {
        /// Path to the table file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: csv::Error,
    },

    /// A table is missing a required column.
    #[error("table {path} is missing required column '{column}'")]
    MissingColumn {
        /// Path to the table file.
        path: PathBuf,
        /// Name of the missing column.
        column: &'static str,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for recipebox operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a table error for the given path.
    #[must_use]
    pub fn table(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Table {
            path: path.into(),
            source,
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this error is a user-facing validation failure.
    ///
    /// Validation failures leave the store untouched and are safe to retry
    /// with corrected input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyField
                | Self::DuplicateName { .. }
                | Self::RenameConflict { .. }
                | Self::UnknownCategory { .. }
        )
    }

    /// Process exit status for a command that failed with this error.
    ///
    /// `2` for rejected input, `3` for a missing recipe, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_validation() {
            2
        } else if self.is_not_found() {
            3
        } else {
            1
        }
    }

    /// Check if this error indicates a missing recipe.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
