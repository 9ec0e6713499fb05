//! Storage layer for recipebox.
//!
//! The [`RecipeStore`] keeps every recipe and the recent-views queue in
//! memory and mirrors each to its own CSV table. Every successful mutation
//! rewrites the affected table in full.

pub mod recent;
pub mod table;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::recipe::Recipe;

pub use recent::{RecentViews, DEFAULT_RECENT_CAPACITY};

/// Recipe store backed by two delimited text tables.
///
/// Recipes are kept in table order and looked up by linear scan; names are
/// unique.
#[derive(Debug)]
pub struct RecipeStore {
    /// Path to the recipe table.
    recipe_path: PathBuf,
    /// Path to the recent-views table.
    recent_path: PathBuf,
    /// All recipes, in table order.
    recipes: Vec<Recipe>,
    /// Recently viewed names.
    recent: RecentViews,
}

impl RecipeStore {
    /// Open the store, loading both tables.
    ///
    /// Missing tables are created with just their header row.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing table cannot be parsed.
    pub fn open(
        recipe_path: impl AsRef<Path>,
        recent_path: impl AsRef<Path>,
        recent_capacity: usize,
    ) -> Result<Self> {
        let recipe_path = recipe_path.as_ref().to_path_buf();
        let recent_path = recent_path.as_ref().to_path_buf();

        let recipes = table::load_recipes(&recipe_path)?;
        let recent = RecentViews::from_names(table::load_recent(&recent_path)?, recent_capacity);

        info!(
            "Opened recipe store with {} recipes at {}",
            recipes.len(),
            recipe_path.display()
        );
        Ok(Self {
            recipe_path,
            recent_path,
            recipes,
            recent,
        })
    }

    /// Get the path to the recipe table.
    #[must_use]
    pub fn recipe_path(&self) -> &Path {
        &self.recipe_path
    }

    /// Get the path to the recent-views table.
    #[must_use]
    pub fn recent_path(&self) -> &Path {
        &self.recent_path
    }

    /// All recipes, in table order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Check whether a recipe with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the store holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct categories in use, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.recipes
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `configured` in its own order, followed by any other category the
    /// store uses, sorted.
    #[must_use]
    pub fn categories_with(&self, configured: &[String]) -> Vec<String> {
        let mut categories = configured.to_vec();
        for category in self.categories() {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Add a new recipe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if any field is empty,
    /// [`Error::DuplicateName`] if the name is taken, or a table error if the
    /// recipe table cannot be written.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;
        if self.contains(&recipe.name) {
            return Err(Error::DuplicateName { name: recipe.name });
        }

        info!("Adding recipe '{}'", recipe.name);
        self.recipes.push(recipe);
        self.save_recipes()
    }

    /// Remove a recipe by name.
    ///
    /// Returns `false` without touching either table if no such recipe
    /// exists. The name is also dropped from the recent views.
    ///
    /// # Errors
    ///
    /// Returns an error if a table cannot be written.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let Some(idx) = self.position(name) else {
            debug!("No recipe named '{}' to remove", name);
            return Ok(false);
        };

        info!("Removing recipe '{}'", name);
        self.recipes.remove(idx);
        self.save_recipes()?;

        if self.recent.remove(name) {
            self.save_recent()?;
        }
        Ok(true)
    }

    /// Replace the recipe named `old_name` with `recipe`.
    ///
    /// The recipe keeps its position in the table. Renames are carried over
    /// to the recent views.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `old_name` does not exist,
    /// [`Error::EmptyField`] if any field is empty, [`Error::RenameConflict`]
    /// if the new name belongs to another recipe, or a table error if a
    /// table cannot be written.
    pub fn update(&mut self, old_name: &str, recipe: Recipe) -> Result<()> {
        let idx = self
            .position(old_name)
            .ok_or_else(|| Error::not_found(old_name))?;
        recipe.validate()?;
        if recipe.name != old_name && self.contains(&recipe.name) {
            return Err(Error::RenameConflict { name: recipe.name });
        }

        let renamed = recipe.name != old_name;
        if renamed {
            info!("Updating recipe '{}' (renamed to '{}')", old_name, recipe.name);
        } else {
            info!("Updating recipe '{}'", old_name);
        }
        let new_name = recipe.name.clone();
        self.recipes[idx] = recipe;
        self.save_recipes()?;

        if renamed && self.recent.rename(old_name, &new_name) {
            self.save_recent()?;
        }
        Ok(())
    }

    /// Open a recipe for viewing and record it in the recent views.
    ///
    /// Returns `None`, leaving the recent views unchanged, if no such recipe
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the recent-views table cannot be written.
    pub fn view(&mut self, name: &str) -> Result<Option<&Recipe>> {
        let Some(idx) = self.position(name) else {
            return Ok(None);
        };

        self.recent.touch(name);
        self.save_recent()?;
        Ok(Some(&self.recipes[idx]))
    }

    /// Recently viewed names, most recent first.
    #[must_use]
    pub fn recent(&self) -> &RecentViews {
        &self.recent
    }

    /// Forget all recent views.
    ///
    /// # Errors
    ///
    /// Returns an error if the recent-views table cannot be written.
    pub fn clear_recent(&mut self) -> Result<()> {
        info!("Clearing {} recent views", self.recent.len());
        self.recent.clear();
        self.save_recent()
    }

    /// Get store statistics.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_recipes: self.recipes.len(),
            total_categories: self.categories().len(),
            recent_views: self.recent.len(),
            recent_capacity: self.recent.capacity(),
            recipe_table_bytes: std::fs::metadata(&self.recipe_path)
                .map(|m| m.len())
                .unwrap_or(0),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.name == name)
    }

    fn save_recipes(&self) -> Result<()> {
        table::save_recipes(&self.recipe_path, &self.recipes)
    }

    fn save_recent(&self) -> Result<()> {
        table::save_recent(&self.recent_path, &self.recent.to_vec())
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of recipes.
    pub total_recipes: usize,
    /// Number of distinct categories in use.
    pub total_categories: usize,
    /// Number of remembered recent views.
    pub recent_views: usize,
    /// Maximum number of recent views kept.
    pub recent_capacity: usize,
    /// Size of the recipe table file in bytes.
    pub recipe_table_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    /// Store seeded with two recipes, saved to disk.
    fn create_test_store() -> (TempDir, RecipeStore) {
        let dir = tempdir().expect("failed to create temp dir");
        let mut store = RecipeStore::open(
            dir.path().join("test_recipes.txt"),
            dir.path().join("test_recent_recipes.txt"),
            DEFAULT_RECENT_CAPACITY,
        )
        .expect("failed to open test store");
        store
            .add(Recipe::new(
                "Apple Pie",
                "Dessert",
                "Apples, Sugar, Pie crust",
                "Mix and bake",
            ))
            .unwrap();
        store
            .add(Recipe::new(
                "Tomato Soup",
                "Appetizer",
                "Tomatoes, Salt, Cream",
                "Boil and blend",
            ))
            .unwrap();
        (dir, store)
    }

    fn reopen(store: &RecipeStore) -> RecipeStore {
        RecipeStore::open(
            store.recipe_path(),
            store.recent_path(),
            DEFAULT_RECENT_CAPACITY,
        )
        .unwrap()
    }

    #[test]
    fn test_open_creates_tables() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::open(
            dir.path().join("recipes.csv"),
            dir.path().join("recent.csv"),
            5,
        )
        .unwrap();

        assert!(store.is_empty());
        assert!(store.recent().is_empty());
        assert!(store.recipe_path().exists());
        assert!(store.recent_path().exists());
    }

    #[test]
    fn test_load_recipes() {
        let (_dir, store) = create_test_store();
        let reloaded = reopen(&store);

        assert!(reloaded.contains("Apple Pie"));
        assert!(reloaded.contains("Tomato Soup"));
        assert_eq!(reloaded.recipes(), store.recipes());
    }

    #[test]
    fn test_add_recipe() {
        let (_dir, mut store) = create_test_store();
        store
            .add(Recipe::new(
                "Cheese Pizza",
                "Main Course",
                "Cheese, Pizza Dough, Tomato Sauce",
                "Bake for 20 minutes",
            ))
            .unwrap();

        assert!(store.contains("Cheese Pizza"));
        assert_eq!(store.len(), 3);
        assert!(reopen(&store).contains("Cheese Pizza"));
    }

    #[test]
    fn test_add_duplicate_recipe() {
        let (_dir, mut store) = create_test_store();
        let err = store
            .add(Recipe::new(
                "Apple Pie",
                "Dessert",
                "Apples, Sugar, Pie crust",
                "Mix and bake",
            ))
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateName { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_empty_field() {
        let (_dir, mut store) = create_test_store();
        let err = store
            .add(Recipe::new("Toast", "Snack", "Bread", ""))
            .unwrap_err();

        assert!(matches!(err, Error::EmptyField));
        assert!(!store.contains("Toast"));
        assert!(!reopen(&store).contains("Toast"));
    }

    #[test]
    fn test_remove_recipe() {
        let (_dir, mut store) = create_test_store();
        assert!(store.remove("Tomato Soup").unwrap());

        assert!(!store.contains("Tomato Soup"));
        assert!(!reopen(&store).contains("Tomato Soup"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (_dir, mut store) = create_test_store();
        assert!(!store.remove("Pancakes").unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_drops_recent_view() {
        let (_dir, mut store) = create_test_store();
        store.view("Apple Pie").unwrap();
        store.view("Tomato Soup").unwrap();
        store.remove("Apple Pie").unwrap();

        assert_eq!(store.recent().to_vec(), vec!["Tomato Soup"]);
        assert_eq!(reopen(&store).recent().to_vec(), vec!["Tomato Soup"]);
    }

    #[test]
    fn test_update_recipe() {
        let (_dir, mut store) = create_test_store();
        store
            .update(
                "Apple Pie",
                Recipe::new(
                    "Apple Pie",
                    "Dessert",
                    "Apples, More Sugar, Pie crust",
                    "Mix well and bake",
                ),
            )
            .unwrap();

        let recipe = store.get("Apple Pie").unwrap();
        assert_eq!(recipe.ingredients, "Apples, More Sugar, Pie crust");
        assert_eq!(
            reopen(&store).get("Apple Pie").unwrap().instructions,
            "Mix well and bake"
        );
    }

    #[test]
    fn test_update_rename_keeps_position() {
        let (_dir, mut store) = create_test_store();
        store
            .update(
                "Apple Pie",
                Recipe::new("Pear Pie", "Dessert", "Pears", "Bake"),
            )
            .unwrap();

        assert!(!store.contains("Apple Pie"));
        assert_eq!(store.recipes()[0].name, "Pear Pie");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_rename_conflict() {
        let (_dir, mut store) = create_test_store();
        let err = store
            .update(
                "Apple Pie",
                Recipe::new("Tomato Soup", "Dessert", "Apples", "Bake"),
            )
            .unwrap_err();

        assert!(matches!(err, Error::RenameConflict { .. }));
        assert_eq!(store.get("Apple Pie").unwrap().ingredients, "Apples, Sugar, Pie crust");
    }

    #[test]
    fn test_update_missing_recipe() {
        let (_dir, mut store) = create_test_store();
        let err = store
            .update("Pancakes", Recipe::new("Pancakes", "Dessert", "Flour", "Fry"))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!store.contains("Pancakes"));
    }

    #[test]
    fn test_update_empty_field() {
        let (_dir, mut store) = create_test_store();
        let err = store
            .update("Apple Pie", Recipe::new("Apple Pie", "", "Apples", "Bake"))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyField));
    }

    #[test]
    fn test_update_rename_follows_recent_view() {
        let (_dir, mut store) = create_test_store();
        store.view("Apple Pie").unwrap();
        store.view("Tomato Soup").unwrap();
        store
            .update(
                "Apple Pie",
                Recipe::new("Pear Pie", "Dessert", "Pears", "Bake"),
            )
            .unwrap();

        assert_eq!(
            reopen(&store).recent().to_vec(),
            vec!["Tomato Soup", "Pear Pie"]
        );
    }

    #[test]
    fn test_view_records_recent() {
        let (_dir, mut store) = create_test_store();
        let recipe = store.view("Tomato Soup").unwrap().unwrap();
        assert_eq!(recipe.category, "Appetizer");

        store.view("Apple Pie").unwrap();
        store.view("Tomato Soup").unwrap();

        assert_eq!(store.recent().to_vec(), vec!["Tomato Soup", "Apple Pie"]);
        assert_eq!(
            reopen(&store).recent().to_vec(),
            vec!["Tomato Soup", "Apple Pie"]
        );
    }

    #[test]
    fn test_view_unknown_leaves_recent() {
        let (_dir, mut store) = create_test_store();
        assert!(store.view("Pancakes").unwrap().is_none());
        assert!(store.recent().is_empty());
    }

    #[test]
    fn test_recent_bounded_across_reopen() {
        let (_dir, mut store) = create_test_store();
        for i in 0..7 {
            store
                .add(Recipe::new(format!("Dish {i}"), "Snack", "Stuff", "Cook"))
                .unwrap();
            store.view(&format!("Dish {i}")).unwrap();
        }

        let expected = vec!["Dish 6", "Dish 5", "Dish 4", "Dish 3", "Dish 2"];
        assert_eq!(store.recent().to_vec(), expected);
        assert_eq!(reopen(&store).recent().to_vec(), expected);
    }

    #[test]
    fn test_clear_recent() {
        let (_dir, mut store) = create_test_store();
        store.view("Apple Pie").unwrap();
        store.clear_recent().unwrap();

        assert!(store.recent().is_empty());
        assert!(reopen(&store).recent().is_empty());
    }

    #[test]
    fn test_categories() {
        let (_dir, mut store) = create_test_store();
        store
            .add(Recipe::new("Brownies", "Dessert", "Chocolate", "Bake"))
            .unwrap();
        assert_eq!(store.categories(), vec!["Appetizer", "Dessert"]);
    }

    #[test]
    fn test_categories_with_appends_store_only_categories() {
        let (_dir, mut store) = create_test_store();
        store
            .add(Recipe::new("Lemonade", "Drinks", "Lemons, Water", "Squeeze"))
            .unwrap();
        let configured = vec!["Dessert".to_string(), "Snack".to_string()];

        assert_eq!(
            store.categories_with(&configured),
            vec!["Dessert", "Snack", "Appetizer", "Drinks"]
        );
    }

    #[test]
    fn test_categories_with_empty_store_is_configured_list() {
        let dir = tempdir().unwrap();
        let store = RecipeStore::open(
            dir.path().join("r.csv"),
            dir.path().join("v.csv"),
            DEFAULT_RECENT_CAPACITY,
        )
        .unwrap();
        let configured = vec!["Snack".to_string(), "Beverage".to_string()];
        assert_eq!(store.categories_with(&configured), configured);
    }

    #[test]
    fn test_stats() {
        let (_dir, mut store) = create_test_store();
        store.view("Apple Pie").unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_recipes, 2);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.recent_views, 1);
        assert_eq!(stats.recent_capacity, DEFAULT_RECENT_CAPACITY);
        assert!(stats.recipe_table_bytes > 0);
    }
}
