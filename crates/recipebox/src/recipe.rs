//! Core recipe type for recipebox.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recipe.
///
/// The name is the recipe's identity within a store. All four fields are
/// free text; ingredients and instructions may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name.
    pub name: String,
    /// Category the recipe is filed under (e.g. "Dessert").
    pub category: String,
    /// Ingredient list as entered by the user.
    pub ingredients: String,
    /// Preparation instructions as entered by the user.
    pub instructions: String,
}

impl Recipe {
    /// Create a recipe, trimming surrounding whitespace from every field.
    #[must_use]
    pub fn new(
        name: impl AsRef<str>,
        category: impl AsRef<str>,
        ingredients: impl AsRef<str>,
        instructions: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            category: category.as_ref().trim().to_string(),
            ingredients: ingredients.as_ref().trim().to_string(),
            instructions: instructions.as_ref().trim().to_string(),
        }
    }

    /// Check that no field is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if any field is empty or whitespace.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            &self.name,
            &self.category,
            &self.ingredients,
            &self.instructions,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::EmptyField);
        }
        Ok(())
    }

    /// Text shown when a recipe is opened.
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "Ingredients:\n{}\nInstructions:\n{}",
            self.ingredients, self.instructions
        )
    }

    /// Case-insensitive substring match on name or ingredients.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.ingredients.to_lowercase().contains(needle)
    }
}
