//! Delimited text tables backing the store.
//!
//! Each table is a CSV file with a header row. Tables are read whole on open
//! and rewritten whole on every save.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::recipe::Recipe;

/// Header of the recipe table.
pub const RECIPE_HEADER: [&str; 4] = ["Name", "Category", "Ingredients", "Instructions"];

/// Header of the recent-views table.
pub const RECENT_HEADER: [&str; 1] = ["Name"];

#[derive(Debug, Deserialize)]
struct RecipeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Ingredients")]
    ingredients: String,
    #[serde(rename = "Instructions")]
    instructions: String,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            name: row.name,
            category: row.category,
            ingredients: row.ingredients,
            instructions: row.instructions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecentRow {
    #[serde(rename = "Name")]
    name: String,
}

/// Load all recipes from `path`.
///
/// A missing file is created with just the header and yields no recipes. If
/// it cannot be created, a warning is logged and loading continues empty.
/// When a name appears twice, the later row replaces the earlier one in place.
///
/// # Errors
///
/// Returns an error if an existing file cannot be parsed or lacks a column.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let Some(mut reader) = open_or_create(path, &RECIPE_HEADER)? else {
        return Ok(Vec::new());
    };

    let mut recipes: Vec<Recipe> = Vec::new();
    for row in reader.deserialize::<RecipeRow>() {
        let recipe = Recipe::from(row.map_err(|e| Error::table(path, e))?);
        if let Some(existing) = recipes.iter_mut().find(|r| r.name == recipe.name) {
            warn!(
                "Duplicate recipe '{}' in {}, keeping the later row",
                recipe.name,
                path.display()
            );
            *existing = recipe;
        } else {
            recipes.push(recipe);
        }
    }

    debug!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Load recently viewed names from `path`, most recent first.
///
/// Missing files are handled as in [`load_recipes`].
///
/// # Errors
///
/// Returns an error if an existing file cannot be parsed or lacks a column.
pub fn load_recent(path: &Path) -> Result<Vec<String>> {
    let Some(mut reader) = open_or_create(path, &RECENT_HEADER)? else {
        return Ok(Vec::new());
    };

    let names = reader
        .deserialize::<RecentRow>()
        .map(|row| row.map(|r| r.name).map_err(|e| Error::table(path, e)))
        .collect::<Result<Vec<_>>>()?;

    debug!("Loaded {} recent views from {}", names.len(), path.display());
    Ok(names)
}

/// Rewrite the recipe table at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_recipes(path: &Path, recipes: &[Recipe]) -> Result<()> {
    let mut writer = create_writer(path, &RECIPE_HEADER)?;
    for recipe in recipes {
        writer
            .write_record([
                &recipe.name,
                &recipe.category,
                &recipe.ingredients,
                &recipe.instructions,
            ])
            .map_err(|e| Error::table(path, e))?;
    }
    writer.flush()?;

    debug!("Saved {} recipes to {}", recipes.len(), path.display());
    Ok(())
}

/// Rewrite the recent-views table at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_recent<S: AsRef<str>>(path: &Path, names: &[S]) -> Result<()> {
    let mut writer = create_writer(path, &RECENT_HEADER)?;
    for name in names {
        writer
            .write_record([name.as_ref()])
            .map_err(|e| Error::table(path, e))?;
    }
    writer.flush()?;

    debug!("Saved {} recent views to {}", names.len(), path.display());
    Ok(())
}

/// Open an existing table for reading, or create an empty one.
///
/// Returns `None` when there is nothing to read: the file was just created,
/// could not be created, or is completely empty.
fn open_or_create(
    path: &Path,
    header: &[&'static str],
) -> Result<Option<csv::Reader<fs::File>>> {
    if !path.exists() {
        match create_writer(path, header).and_then(|mut w| w.flush().map_err(Error::from)) {
            Ok(()) => debug!("Created empty table at {}", path.display()),
            Err(e) => warn!("Error creating file {}: {e}", path.display()),
        }
        return Ok(None);
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::table(path, e))?;
    let headers = reader.headers().map_err(|e| Error::table(path, e))?;
    if headers.is_empty() {
        debug!("Table {} is empty", path.display());
        return Ok(None);
    }
    for &column in header {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    Ok(Some(reader))
}

/// Create (or truncate) a table file and write its header.
fn create_writer(path: &Path, header: &[&str]) -> Result<csv::Writer<fs::File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::table(path, e))?;
    writer
        .write_record(header)
        .map_err(|e| Error::table(path, e))?;
    Ok(writer)
}
