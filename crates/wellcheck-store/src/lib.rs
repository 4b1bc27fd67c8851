//! wellcheck-store — Durable JSON progress persistence.
//!
//! One JSON file per catalog kind holds the completion record and badge set
//! as a single document. Saves are merge-writes: the freshest on-disk state
//! is re-read and unioned with the incoming state before an atomic
//! temp-file-and-rename write, so a save from a stale reader can add
//! completions but never drop them. Loads are fail-soft: a missing or
//! malformed file yields empty defaults and a warning, never an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wellcheck_core::model::CatalogKind;
use wellcheck_core::progress::{ProgressState, ProgressStore};

/// A [`ProgressStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional per-kind store file inside a data directory.
    ///
    /// Assessment and quiz progress are independent records under distinct
    /// storage keys, so each kind gets its own file.
    pub fn for_kind(data_dir: &Path, kind: CatalogKind) -> Self {
        Self::new(data_dir.join(format!("{kind}-progress.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> ProgressState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return ProgressState::default();
            }
            Err(e) => {
                tracing::warn!(
                    "could not read progress from {}: {e}; starting empty",
                    self.path.display()
                );
                return ProgressState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "malformed progress in {}: {e}; starting empty",
                    self.path.display()
                );
                ProgressState::default()
            }
        }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> ProgressState {
        self.read_state()
    }

    fn save(&self, state: &ProgressState) -> Result<()> {
        // Merge with whatever landed on disk since our last load, then
        // replace the file in one rename.
        let mut merged = self.read_state();
        merged.merge(state);

        let json = serde_json::to_string_pretty(&merged).context("failed to serialize progress")?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write progress to {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        Ok(())
    }
}
