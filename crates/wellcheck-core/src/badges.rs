//! Badge rule evaluation.
//!
//! A pure function from (completion record, already-unlocked badges, rule
//! set) to the new badge set. The output is always a superset of the input:
//! badges are never removed, evaluation is idempotent, and re-running it
//! over a record that already satisfies some rules grants nothing twice.
//! Completion keys that do not correspond to a catalog entry are ignored by
//! every predicate.

use crate::model::{BadgeRule, BadgeRuleKind, Catalog};
use crate::progress::{BadgeSet, CompletionRecord};

/// Evaluate every rule against the record and return the grown badge set.
pub fn evaluate(
    record: &CompletionRecord,
    unlocked: &BadgeSet,
    rules: &[BadgeRule],
    catalog: &Catalog,
) -> BadgeSet {
    let mut result = unlocked.clone();
    for rule in rules {
        if result.contains(&rule.badge.id) {
            continue;
        }
        if satisfied(&rule.rule, record, catalog) {
            tracing::debug!("badge {} unlocked", rule.badge.id);
            result.unlock(rule.badge.id.clone());
        }
    }
    result
}

/// Count completions that refer to a real catalog entry.
fn completed_entry_count(record: &CompletionRecord, catalog: &Catalog) -> usize {
    catalog
        .iter_entries()
        .filter(|(category, entry)| record.is_completed(&category.id, &entry.id))
        .count()
}

fn satisfied(rule: &BadgeRuleKind, record: &CompletionRecord, catalog: &Catalog) -> bool {
    match rule {
        BadgeRuleKind::CategoryComplete { category_id } => catalog
            .categories
            .iter()
            .find(|c| &c.id == category_id)
            .is_some_and(|category| {
                !category.entries.is_empty()
                    && category
                        .entries
                        .iter()
                        .all(|entry| record.is_completed(&category.id, &entry.id))
            }),
        BadgeRuleKind::TotalAtLeast { count } => {
            completed_entry_count(record, catalog) >= *count
        }
        BadgeRuleKind::CatalogComplete => {
            let total = catalog.entry_count();
            total > 0 && completed_entry_count(record, catalog) == total
        }
    }
}
