//! `recipebox` - A single-user recipe organizer
//!
//! This library provides the recipe store, which keeps recipes and a short
//! list of recently viewed recipes in memory and mirrors both to plain CSV
//! tables, along with the listing, search and configuration helpers used by
//! the `recipebox` command-line front end.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod storage;

pub use browse::{Listing, SortOrder};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use recipe::Recipe;
pub use storage::{RecentViews, RecipeStore, StoreStats};
