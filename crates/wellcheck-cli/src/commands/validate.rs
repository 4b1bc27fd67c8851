//! The `wellcheck validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use wellcheck_core::parser;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let files = if catalog_path.is_dir() {
        collect_toml_files(&catalog_path)?
    } else {
        vec![catalog_path]
    };

    anyhow::ensure!(!files.is_empty(), "no catalog files found");

    let mut total_issues = 0;

    for path in &files {
        let catalog = parser::parse_catalog(path)?;
        println!(
            "Catalog: {} ({} kind, {} categories, {} entries)",
            path.display(),
            catalog.kind,
            catalog.categories.len(),
            catalog.entry_count()
        );

        let issues = parser::validate_catalog(&catalog);
        for issue in &issues {
            println!("  ISSUE: {issue}");
        }
        total_issues += issues.len();
    }

    if total_issues == 0 {
        println!("All catalogs valid.");
        Ok(())
    } else {
        anyhow::bail!("{total_issues} issue(s) found");
    }
}

fn collect_toml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(collect_toml_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
