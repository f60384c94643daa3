//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use pluralis::{Category, LocaleRule, PluralOperands};

/// Classification of a single quantity.
pub struct CategoryRow {
    /// Quantity as typed on the command line.
    pub quantity: String,
    pub operands: PluralOperands,
    pub category: Category,
}

/// Format classified quantities as an ASCII table.
pub fn format_category_table(rows: &[CategoryRow]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Quantity", "i", "v", "f", "Category"]);

    for row in rows {
        table.add_row(vec![
            row.quantity.clone(),
            row.operands.i.to_string(),
            row.operands.v.to_string(),
            row.operands.f.to_string(),
            row.category.to_string(),
        ]);
    }

    table
}

/// Format registered locales with their rule family and categories.
pub fn format_locales_table(locales: &[(&str, LocaleRule)]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Locale", "Rule", "Categories"]);

    for (locale, rule) in locales {
        let categories: Vec<&str> = rule.categories().iter().map(Category::as_str).collect();
        table.add_row(vec![
            (*locale).to_string(),
            rule.to_string(),
            categories.join(", "),
        ]);
    }

    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
