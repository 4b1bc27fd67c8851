//! The `wellcheck list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wellcheck_core::parser;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = parser::load_catalog(&catalog_path)?;

    println!(
        "{} catalog: {} categories, {} entries\n",
        catalog.kind,
        catalog.categories.len(),
        catalog.entry_count()
    );

    let mut table = Table::new();
    table.set_header(vec!["Category", "Entry", "Title", "Questions"]);

    for (category, entry) in catalog.iter_entries() {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&entry.id),
            Cell::new(&entry.title),
            Cell::new(entry.questions.len()),
        ]);
    }

    println!("{table}");

    let rules = catalog.badge_rules();
    if !rules.is_empty() {
        println!("\nBadges:");
        for rule in &rules {
            println!("  {} ({})", rule.badge.id, rule.badge.title);
        }
    }

    Ok(())
}
