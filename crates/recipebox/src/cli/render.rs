//! Text rendering for CLI output.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::recipe::Recipe;
use crate::storage::StoreStats;

/// Render recipe rows as a table of names and categories.
#[must_use]
pub fn recipe_table(rows: &[&Recipe]) -> String {
    if rows.is_empty() {
        return "No recipes found.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Recipe Name"), Cell::new("Category")]);
    for recipe in rows {
        table.add_row(vec![Cell::new(&recipe.name), Cell::new(&recipe.category)]);
    }
    table.to_string()
}

/// Render recipe rows as `name<TAB>category` lines.
#[must_use]
pub fn recipe_lines(rows: &[&Recipe]) -> String {
    rows.iter()
        .map(|r| format!("{}\t{}", r.name, r.category))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single recipe in full.
#[must_use]
pub fn recipe_details(recipe: &Recipe) -> String {
    format!(
        "{}\nCategory: {}\n\n{}",
        recipe.name,
        recipe.category,
        recipe.details()
    )
}

/// Render the recent-views list, most recent first.
#[must_use]
pub fn recent_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let lines: Vec<String> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {name}", i + 1))
        .collect();
    if lines.is_empty() {
        "No recently viewed recipes.".to_string()
    } else {
        lines.join("\n")
    }
}

/// Render store statistics.
#[must_use]
pub fn status(recipe_path: &str, recent_path: &str, stats: &StoreStats) -> String {
    [
        "recipebox status".to_string(),
        "----------------".to_string(),
        format!("Recipe table:  {recipe_path}"),
        format!("Recent table:  {recent_path}"),
        format!("Recipes:       {}", stats.total_recipes),
        format!("Categories:    {}", stats.total_categories),
        format!(
            "Recent views:  {}/{}",
            stats.recent_views, stats.recent_capacity
        ),
        format!("Table size:    {}", format_size(stats.recipe_table_bytes)),
    ]
    .join("\n")
}

/// Format bytes as human-readable size
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
