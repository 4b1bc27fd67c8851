//! Engine façade: the operations the presentation shell consumes.
//!
//! Owns the validated catalog and the injected progress store, and wires the
//! session runner, scorer, badge evaluator, and recommendation mapper
//! together. Finishing a session is the only path that touches persisted
//! state: score → mark completion → re-evaluate badges over the merged
//! record → save.

use anyhow::{Context, Result};

use crate::badges;
use crate::error::EngineError;
use crate::model::{Badge, Catalog, CatalogKind};
use crate::progress::{ProgressState, ProgressStore};
use crate::recommend;
use crate::scorer::{self, SessionOutcome, SessionResult};
use crate::session::{Session, SessionEvent, SessionState};

/// What an `advance` call did.
#[derive(Debug)]
pub enum AdvanceOutcome {
    /// The current question has no recorded answer; nothing changed.
    Blocked,
    /// Moved forward to the given question index.
    Moved(usize),
    /// The final question was passed; the attempt is scored and persisted.
    Finished(Box<SessionResult>),
}

/// The engine: validated content plus a progress store.
pub struct Engine {
    catalog: Catalog,
    store: Box<dyn ProgressStore>,
}

impl Engine {
    /// Build an engine over a catalog that already passed
    /// [`crate::parser::load_catalog`] validation.
    pub fn new(catalog: Catalog, store: Box<dyn ProgressStore>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn kind(&self) -> CatalogKind {
        self.catalog.kind
    }

    /// Start a fresh attempt at the given entry.
    ///
    /// A prior persisted completion of the same entry is untouched until
    /// the new attempt also completes.
    pub fn start_session(
        &self,
        category_id: &str,
        entry_id: &str,
    ) -> Result<Session, EngineError> {
        let Some((_, entry)) = self.catalog.find_entry(category_id, entry_id) else {
            return Err(EngineError::NotFound {
                category_id: category_id.to_string(),
                entry_id: entry_id.to_string(),
            });
        };

        let question_ids = entry.questions.iter().map(|q| q.id.clone()).collect();
        tracing::debug!("starting {} session {category_id}/{entry_id}", self.kind());
        Ok(Session::new(
            category_id,
            entry_id,
            question_ids,
            self.kind().allows_retreat(),
        ))
    }

    /// Record an answer for the session's current question.
    ///
    /// Overwrites any earlier answer for that question and does not advance.
    /// Outside `InProgress` this is a no-op, matching the runner's blocked
    /// semantics.
    pub fn answer_current(&self, session: &mut Session, choice: usize) -> Result<(), EngineError> {
        let Some(question_id) = session.current_question_id().map(str::to_string) else {
            tracing::debug!("ignoring answer outside an in-progress session");
            return Ok(());
        };

        let option_count = self
            .catalog
            .find_entry(session.category_id(), session.entry_id())
            .and_then(|(_, entry)| entry.questions.iter().find(|q| q.id == question_id))
            .map(|q| q.options.len())
            .unwrap_or(0);
        if choice >= option_count {
            return Err(EngineError::InvalidChoice {
                question_id,
                choice,
            });
        }

        session.apply(SessionEvent::Answer {
            question_id,
            choice,
        });
        Ok(())
    }

    /// Whether `advance` would move forward.
    pub fn can_advance(&self, session: &Session) -> bool {
        session.can_advance()
    }

    /// Advance the session. At the last question this completes the
    /// attempt: the score is computed, the completion record and badge set
    /// are merged and persisted, and the terminal result is returned.
    pub fn advance(&self, session: &mut Session) -> Result<AdvanceOutcome> {
        let before = session.state();
        let after = session.apply(SessionEvent::Advance);

        match after {
            SessionState::Completed => {
                let result = self.finish(session)?;
                Ok(AdvanceOutcome::Finished(Box::new(result)))
            }
            SessionState::InProgress { index } if after != before => {
                Ok(AdvanceOutcome::Moved(index))
            }
            _ => Ok(AdvanceOutcome::Blocked),
        }
    }

    /// Move back one question (assessments only; blocked at index 0).
    pub fn retreat(&self, session: &mut Session) -> SessionState {
        session.apply(SessionEvent::Retreat)
    }

    /// Discard the attempt. No persistence side effect.
    pub fn reset_session(&self, session: &mut Session) {
        session.apply(SessionEvent::Reset);
    }

    /// The persisted completion record and badge set.
    pub fn progress_summary(&self) -> ProgressState {
        self.store.load()
    }

    fn finish(&self, session: &Session) -> Result<SessionResult> {
        let (category, entry) = self
            .catalog
            .find_entry(session.category_id(), session.entry_id())
            .context("completed session refers to an entry missing from the catalog")?;

        let kind = self.catalog.kind;
        let total_score = scorer::total_score(kind, entry, session.answers());
        let max_score = entry.max_score(kind);
        let band = match kind {
            CatalogKind::Assessment => scorer::band_for(&entry.bands, total_score).cloned(),
            CatalogKind::Quiz => None,
        };

        let mut persisted = self.store.load();
        persisted
            .completion_record
            .mark_completed(&category.id, &entry.id);

        let rules = self.catalog.badge_rules();
        let new_badges = badges::evaluate(
            &persisted.completion_record,
            &persisted.badge_set,
            &rules,
            &self.catalog,
        );
        let newly_unlocked: Vec<Badge> = rules
            .iter()
            .filter(|r| new_badges.contains(&r.badge.id) && !persisted.badge_set.contains(&r.badge.id))
            .map(|r| r.badge.clone())
            .collect();
        persisted.badge_set = new_badges;

        self.store
            .save(&persisted)
            .context("failed to persist progress")?;

        let suggestions = recommend::suggest(kind, category, total_score, max_score);
        tracing::debug!(
            "finished {}/{}: {total_score}/{max_score}, {} new badge(s)",
            category.id,
            entry.id,
            newly_unlocked.len()
        );

        Ok(SessionResult {
            outcome: SessionOutcome {
                total_score,
                max_score,
                band,
                suggestions,
                reflective_tip: entry.reflective_tip.clone(),
            },
            newly_unlocked,
        })
    }
}
