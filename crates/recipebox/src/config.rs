//! Configuration management for recipebox.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::collections::HashSet;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::DEFAULT_RECENT_CAPACITY;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "recipebox";

/// Default recipe table file name.
const RECIPE_FILE_NAME: &str = "recipes.csv";

/// Default recent-views table file name.
const RECENT_FILE_NAME: &str = "recent_recipes.csv";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `RECIPEBOX_`, sections separated
///    by `__`, e.g. `RECIPEBOX_STORAGE__RECENT_CAPACITY`)
/// 2. TOML config file at `~/.config/recipebox/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Category catalog configuration.
    pub catalog: CatalogConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the recipe table.
    /// Defaults to `~/.local/share/recipebox/recipes.csv`
    pub recipe_path: Option<PathBuf>,
    /// Path to the recent-views table.
    /// Defaults to `~/.local/share/recipebox/recent_recipes.csv`
    pub recent_path: Option<PathBuf>,
    /// Number of recently viewed recipes to remember.
    pub recent_capacity: usize,
}

/// Category catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Categories offered when adding or editing a recipe.
    pub categories: Vec<String>,
    /// Accept categories outside the list.
    pub allow_custom_categories: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            recipe_path: None, // Will be resolved to default at runtime
            recent_path: None,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            allow_custom_categories: false,
        }
    }
}

/// Default recipe categories.
fn default_categories() -> Vec<String> {
    ["Dessert", "Main Course", "Appetizer", "Beverage", "Snack"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("RECIPEBOX_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.recent_capacity == 0 {
            return Err(Error::ConfigValidation {
                message: "recent_capacity must be greater than 0".to_string(),
            });
        }

        if self.catalog.categories.is_empty() && !self.catalog.allow_custom_categories {
            return Err(Error::ConfigValidation {
                message: "categories cannot be empty unless allow_custom_categories is set"
                    .to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in &self.catalog.categories {
            if category.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "categories cannot contain an empty name".to_string(),
                });
            }
            if !seen.insert(category.as_str()) {
                return Err(Error::ConfigValidation {
                    message: format!("duplicate category: {category}"),
                });
            }
        }

        if self.recipe_path() == self.recent_path() {
            return Err(Error::ConfigValidation {
                message: "recipe_path and recent_path must be different files".to_string(),
            });
        }

        Ok(())
    }

    /// Get the recipe table path, resolving defaults if not set.
    #[must_use]
    pub fn recipe_path(&self) -> PathBuf {
        self.storage
            .recipe_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECIPE_FILE_NAME))
    }

    /// Get the recent-views table path, resolving defaults if not set.
    #[must_use]
    pub fn recent_path(&self) -> PathBuf {
        self.storage
            .recent_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECENT_FILE_NAME))
    }

    /// Check a category against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if the category is not listed and
    /// custom categories are not allowed.
    pub fn check_category(&self, category: &str) -> Result<()> {
        let category = category.trim();
        if self.catalog.allow_custom_categories
            || self.catalog.categories.iter().any(|c| c == category)
        {
            return Ok(());
        }
        Err(Error::UnknownCategory {
            category: category.to_string(),
            allowed: self.catalog.categories.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.storage.recent_capacity, 5);
        assert!(config.storage.recipe_path.is_none());
        assert!(config.storage.recent_path.is_none());
        assert!(!config.catalog.allow_custom_categories);
    }

    #[test]
    fn test_default_categories() {
        let catalog = CatalogConfig::default();
        assert_eq!(
            catalog.categories,
            vec!["Dessert", "Main Course", "Appetizer", "Beverage", "Snack"]
        );
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_recent_capacity() {
        let mut config = Config::default();
        config.storage.recent_capacity = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("recent_capacity"));
    }

    #[test]
    fn test_validate_duplicate_category() {
        let mut config = Config::default();
        config.catalog.categories.push("Dessert".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("duplicate category: Dessert"));
    }

    #[test]
    fn test_validate_empty_categories() {
        let mut config = Config::default();
        config.catalog.categories.clear();
        assert!(config.validate().is_err());

        config.catalog.allow_custom_categories = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_same_paths() {
        let mut config = Config::default();
        config.storage.recipe_path = Some(PathBuf::from("/tmp/one.csv"));
        config.storage.recent_path = Some(PathBuf::from("/tmp/one.csv"));

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("must be different"));
    }

    #[test]
    fn test_recipe_path_default() {
        let config = Config::default();
        let path = config.recipe_path();

        assert!(path.to_string_lossy().contains("recipebox"));
        assert!(path.to_string_lossy().ends_with("recipes.csv"));
    }

    #[test]
    fn test_recent_path_custom() {
        let mut config = Config::default();
        config.storage.recent_path = Some(PathBuf::from("/custom/recent.csv"));

        assert_eq!(config.recent_path(), PathBuf::from("/custom/recent.csv"));
    }

    #[test]
    fn test_check_category() {
        let mut config = Config::default();
        assert!(config.check_category("Dessert").is_ok());
        assert!(config.check_category(" Snack ").is_ok());

        let err = config.check_category("Soup").unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { .. }));
        assert!(err.to_string().contains("Main Course"));

        config.catalog.allow_custom_categories = true;
        assert!(config.check_category("Soup").is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("recipebox"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[storage]
recipe_path = "/data/recipes.csv"
recent_capacity = 8

[catalog]
categories = ["Bread", "Soup"]
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.recipe_path(), PathBuf::from("/data/recipes.csv"));
        assert_eq!(config.storage.recent_capacity, 8);
        assert_eq!(config.catalog.categories, vec!["Bread", "Soup"]);
        assert!(!config.catalog.allow_custom_categories);
    }

    #[test]
    fn test_load_invalid_toml_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nrecent_capacity = 0\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_load_malformed_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\nrecent_capacity = \"three\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"recent_capacity": 3}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.recent_capacity, 3);
        assert!(storage.recipe_path.is_none());
    }
}
