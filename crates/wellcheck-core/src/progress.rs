//! Persisted progress: completion record, badge set, and the store contract.
//!
//! The persisted shape is storage-medium-agnostic JSON:
//!
//! ```json
//! { "completionRecord": { "<categoryId>_<entryId>": true }, "badgeSet": ["<badgeId>"] }
//! ```
//!
//! Two independent instances exist, one per catalog kind, under distinct
//! storage keys. The engine only ever grows both members: completion keys
//! are never unset and badges are never removed.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// The composite key a finished attempt is recorded under.
pub fn completion_key(category_id: &str, entry_id: &str) -> String {
    format!("{category_id}_{entry_id}")
}

/// Which catalog entries have been finished at least once.
///
/// Append-only in effect: marking is idempotent and nothing the engine does
/// ever resets a key back to false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionRecord(BTreeMap<String, bool>);

impl CompletionRecord {
    /// Mark the (category, entry) pair as completed.
    pub fn mark_completed(&mut self, category_id: &str, entry_id: &str) {
        self.0.insert(completion_key(category_id, entry_id), true);
    }

    pub fn is_completed(&self, category_id: &str, entry_id: &str) -> bool {
        self.contains_key(&completion_key(category_id, entry_id))
    }

    /// Whether the raw composite key is marked completed.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Union with another record. Keys only ever turn true.
    pub fn merge(&mut self, other: &CompletionRecord) {
        for (key, completed) in &other.0 {
            if *completed {
                self.0.insert(key.clone(), true);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| !v)
    }
}

/// The set of unlocked badge ids. Monotonic: insertion only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeSet(BTreeSet<String>);

impl BadgeSet {
    pub fn unlock(&mut self, badge_id: impl Into<String>) {
        self.0.insert(badge_id.into());
    }

    pub fn contains(&self, badge_id: &str) -> bool {
        self.0.contains(badge_id)
    }

    pub fn merge(&mut self, other: &BadgeSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the engine persists for one catalog kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completion_record: CompletionRecord,
    pub badge_set: BadgeSet,
}

impl ProgressState {
    /// Union with another state. Both members only grow.
    pub fn merge(&mut self, other: &ProgressState) {
        self.completion_record.merge(&other.completion_record);
        self.badge_set.merge(&other.badge_set);
    }
}

/// Persistence contract for progress state.
///
/// `load` is fail-soft: missing or malformed stored data yields empty
/// defaults, never an error. `save` persists the whole state as one record.
pub trait ProgressStore {
    fn load(&self) -> ProgressState;
    fn save(&self, state: &ProgressState) -> anyhow::Result<()>;
}

/// In-memory store used in tests and as the reference backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<ProgressState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> ProgressState {
        self.state.lock().unwrap().clone()
    }

    fn save(&self, state: &ProgressState) -> anyhow::Result<()> {
        let mut guard = self.state.lock().unwrap();
        guard.merge(state);
        Ok(())
    }
}
