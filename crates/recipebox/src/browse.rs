//! Listing, search, filtering and ordering of recipes.
//!
//! These helpers work on borrowed recipes and never touch the store, so the
//! same listing can be re-run with a different filter or order.

use crate::recipe::Recipe;

/// Sort direction for recipe names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// A to Z.
    #[default]
    Ascending,
    /// Z to A.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Recipes whose name or ingredients contain `query`, ignoring case.
///
/// An empty query matches everything.
#[must_use]
pub fn search<'a>(recipes: &[&'a Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    recipes
        .iter()
        .copied()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}

/// Recipes in `category`. `None` means all categories.
#[must_use]
pub fn filter_by_category<'a>(recipes: &[&'a Recipe], category: Option<&str>) -> Vec<&'a Recipe> {
    match category {
        Some(category) => recipes
            .iter()
            .copied()
            .filter(|r| r.category == category)
            .collect(),
        None => recipes.to_vec(),
    }
}

/// Order recipes by name, ignoring case. Equal names keep their input order.
pub fn sort_by_name(recipes: &mut [&Recipe], order: SortOrder) {
    insertion_sort_by_key(recipes, |r| r.name.to_lowercase(), order);
}

/// Stable in-place insertion sort.
fn insertion_sort_by_key<T, K, F>(items: &mut [T], mut key: F, order: SortOrder)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    for i in 1..items.len() {
        let current = key(&items[i]);
        let mut pos = i;
        while pos > 0 {
            let prev = key(&items[pos - 1]);
            let out_of_order = match order {
                SortOrder::Ascending => prev > current,
                SortOrder::Descending => prev < current,
            };
            if !out_of_order {
                break;
            }
            items.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

/// A listing query: category filter, then text search, then ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Only show this category. `None` shows all categories.
    pub category: Option<String>,
    /// Text to search for in names and ingredients.
    pub query: Option<String>,
    /// Name ordering.
    pub order: SortOrder,
}

impl Listing {
    /// Run the listing over `recipes`.
    #[must_use]
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let all: Vec<&Recipe> = recipes.iter().collect();
        let mut rows = filter_by_category(&all, self.category.as_deref());
        if let Some(query) = self.query.as_deref() {
            rows = search(&rows, query);
        }
        sort_by_name(&mut rows, self.order);
        rows
    }
}
