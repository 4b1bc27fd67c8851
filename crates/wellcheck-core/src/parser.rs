//! TOML catalog parser and load-time validation.
//!
//! Content defects (duplicate ids, band tables with gaps or overlaps,
//! missing correct answers) are authoring errors, not runtime conditions:
//! [`load_catalog`] rejects a catalog outright rather than letting a broken
//! band table silently misclassify scores later.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Catalog, CatalogKind, Entry};

/// A defect found during catalog validation.
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    /// The category/entry the issue belongs to (if applicable).
    pub scope: Option<String>,
    /// Issue message.
    pub message: String,
}

impl CatalogIssue {
    fn new(scope: Option<String>, message: impl Into<String>) -> Self {
        Self {
            scope,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "[{scope}] {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Parse a single TOML file into a [`Catalog`] without validating it.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a [`Catalog`] (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))
}

/// Parse and validate a catalog, rejecting it if any issue is found.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = parse_catalog(path)?;
    let issues = validate_catalog(&catalog);
    if !issues.is_empty() {
        let listing = issues
            .iter()
            .map(|i| format!("  {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        anyhow::bail!(
            "invalid catalog {}: {} issue(s)\n{listing}",
            path.display(),
            issues.len()
        );
    }
    Ok(catalog)
}

/// Load all valid `.toml` catalogs from a directory, skipping broken files.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match load_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Validate a catalog. An empty result means the catalog is usable; any
/// issue at all means it must be rejected.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    check_unique_ids(catalog, &mut issues);

    for category in &catalog.categories {
        if category.entries.is_empty() {
            issues.push(CatalogIssue::new(
                Some(category.id.clone()),
                "category has no entries",
            ));
        }
        for entry in &category.entries {
            let scope = format!("{}/{}", category.id, entry.id);
            check_questions(catalog.kind, entry, &scope, &mut issues);
            match catalog.kind {
                CatalogKind::Assessment => check_bands(entry, &scope, &mut issues),
                CatalogKind::Quiz => {
                    if !entry.bands.is_empty() {
                        issues.push(CatalogIssue::new(
                            Some(scope.clone()),
                            "quiz entries do not take score bands",
                        ));
                    }
                }
            }
        }
    }

    check_badge_rules(catalog, &mut issues);

    issues
}

fn check_unique_ids(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    let mut category_ids = std::collections::HashSet::new();
    for category in &catalog.categories {
        if !category_ids.insert(&category.id) {
            issues.push(CatalogIssue::new(
                Some(category.id.clone()),
                format!("duplicate category id: {}", category.id),
            ));
        }

        let mut entry_ids = std::collections::HashSet::new();
        for entry in &category.entries {
            if !entry_ids.insert(&entry.id) {
                issues.push(CatalogIssue::new(
                    Some(category.id.clone()),
                    format!("duplicate entry id: {}", entry.id),
                ));
            }

            let mut question_ids = std::collections::HashSet::new();
            for question in &entry.questions {
                if !question_ids.insert(&question.id) {
                    issues.push(CatalogIssue::new(
                        Some(format!("{}/{}", category.id, entry.id)),
                        format!("duplicate question id: {}", question.id),
                    ));
                }
            }
        }
    }
}

fn check_questions(
    kind: CatalogKind,
    entry: &Entry,
    scope: &str,
    issues: &mut Vec<CatalogIssue>,
) {
    if entry.questions.is_empty() {
        issues.push(CatalogIssue::new(
            Some(scope.to_string()),
            "entry has no questions",
        ));
    }

    for question in &entry.questions {
        if question.options.len() < 2 {
            issues.push(CatalogIssue::new(
                Some(scope.to_string()),
                format!("question {} needs at least two options", question.id),
            ));
        }

        match kind {
            CatalogKind::Assessment => {
                if question.correct_index.is_some() {
                    issues.push(CatalogIssue::new(
                        Some(scope.to_string()),
                        format!(
                            "assessment question {} must not set correct_index",
                            question.id
                        ),
                    ));
                }
                for (idx, option) in question.options.iter().enumerate() {
                    if option.score.is_none() {
                        issues.push(CatalogIssue::new(
                            Some(scope.to_string()),
                            format!("question {} option {idx} is missing a score", question.id),
                        ));
                    }
                }
            }
            CatalogKind::Quiz => {
                match question.correct_index {
                    None => issues.push(CatalogIssue::new(
                        Some(scope.to_string()),
                        format!("quiz question {} is missing correct_index", question.id),
                    )),
                    Some(idx) if idx >= question.options.len() => {
                        issues.push(CatalogIssue::new(
                            Some(scope.to_string()),
                            format!(
                                "quiz question {} correct_index {idx} is out of range",
                                question.id
                            ),
                        ));
                    }
                    Some(_) => {}
                }
                if question.options.iter().any(|o| o.score.is_some()) {
                    issues.push(CatalogIssue::new(
                        Some(scope.to_string()),
                        format!("quiz question {} options must not carry scores", question.id),
                    ));
                }
            }
        }
    }
}

/// The band table must start at 0, be contiguous, and cover the full
/// reachable score range.
fn check_bands(entry: &Entry, scope: &str, issues: &mut Vec<CatalogIssue>) {
    if entry.bands.is_empty() {
        issues.push(CatalogIssue::new(
            Some(scope.to_string()),
            "assessment entry has no score bands",
        ));
        return;
    }

    let max_score = entry.max_score(CatalogKind::Assessment);
    let mut expected_min = 0u32;

    for (idx, band) in entry.bands.iter().enumerate() {
        if band.min > band.max {
            issues.push(CatalogIssue::new(
                Some(scope.to_string()),
                format!("band {idx} has min {} greater than max {}", band.min, band.max),
            ));
            return;
        }
        if band.min != expected_min {
            let kind = if band.min > expected_min { "gap" } else { "overlap" };
            issues.push(CatalogIssue::new(
                Some(scope.to_string()),
                format!(
                    "{kind} in band table: band {idx} starts at {} but {} was expected",
                    band.min, expected_min
                ),
            ));
            return;
        }
        expected_min = band.max + 1;
    }

    let covered_max = expected_min - 1;
    if covered_max != max_score {
        issues.push(CatalogIssue::new(
            Some(scope.to_string()),
            format!("bands cover 0..={covered_max} but the entry's score range is 0..={max_score}"),
        ));
    }
}

fn check_badge_rules(catalog: &Catalog, issues: &mut Vec<CatalogIssue>) {
    use crate::model::BadgeRuleKind;

    let mut badge_ids = std::collections::HashSet::new();
    for rule in catalog.badge_rules() {
        if !badge_ids.insert(rule.badge.id.clone()) {
            issues.push(CatalogIssue::new(
                None,
                format!("duplicate badge id: {}", rule.badge.id),
            ));
        }

        match &rule.rule {
            BadgeRuleKind::CategoryComplete { category_id } => {
                if !catalog.categories.iter().any(|c| &c.id == category_id) {
                    issues.push(CatalogIssue::new(
                        None,
                        format!(
                            "badge {} references unknown category {category_id}",
                            rule.badge.id
                        ),
                    ));
                }
            }
            BadgeRuleKind::TotalAtLeast { count } => {
                if *count == 0 {
                    issues.push(CatalogIssue::new(
                        None,
                        format!("badge {} requires a count of at least 1", rule.badge.id),
                    ));
                } else if *count > catalog.entry_count() {
                    issues.push(CatalogIssue::new(
                        None,
                        format!(
                            "badge {} requires {count} completions but the catalog only has {}",
                            rule.badge.id,
                            catalog.entry_count()
                        ),
                    ));
                }
            }
            BadgeRuleKind::CatalogComplete => {}
        }
    }
}
