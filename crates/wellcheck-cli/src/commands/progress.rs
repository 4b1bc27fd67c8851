//! The `wellcheck progress` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use wellcheck_core::parser;
use wellcheck_core::progress::ProgressStore;
use wellcheck_store::JsonFileStore;

pub fn execute(catalog_path: PathBuf, data_dir: PathBuf) -> Result<()> {
    let catalog = parser::load_catalog(&catalog_path)?;
    let store = JsonFileStore::for_kind(&data_dir, catalog.kind);
    let state = store.load();

    let mut completed = 0usize;
    let mut table = Table::new();
    table.set_header(vec!["Category", "Entry", "Title", "Completed"]);

    for (category, entry) in catalog.iter_entries() {
        let done = state.completion_record.is_completed(&category.id, &entry.id);
        if done {
            completed += 1;
        }
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&entry.id),
            Cell::new(&entry.title),
            Cell::new(if done { "yes" } else { "-" }),
        ]);
    }

    println!("{table}");
    println!(
        "\nCompleted {completed}/{} {} entries.",
        catalog.entry_count(),
        catalog.kind
    );

    let rules = catalog.badge_rules();
    if !rules.is_empty() {
        println!("\nBadges:");
        for rule in &rules {
            let status = if state.badge_set.contains(&rule.badge.id) {
                "unlocked"
            } else {
                "locked"
            };
            println!("  [{status}] {}: {}", rule.badge.title, rule.badge.description);
        }
    }

    Ok(())
}
