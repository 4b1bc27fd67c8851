//! Single-attempt session state machine.
//!
//! A session is transient: created on start, discarded on reset or when the
//! caller walks away. It is never persisted; only the completion record and
//! badge set survive a finished attempt, and those belong to the progress
//! store. Every mutation routes through [`Session::apply`], one transition
//! function over `(state, event)`, so the runner stays independent of any
//! rendering concern.

use std::collections::BTreeMap;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No attempt in progress.
    Idle,
    /// Attempt underway, positioned at the given question index.
    InProgress { index: usize },
    /// The final question was advanced past; the attempt is finished.
    Completed,
}

/// Everything that can happen to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Record (or overwrite) the answer for a question.
    Answer { question_id: String, choice: usize },
    /// Move to the next question, or complete at the last one.
    Advance,
    /// Move back one question (assessments only).
    Retreat,
    /// Discard the attempt and return to idle.
    Reset,
}

/// One in-progress or just-finished attempt at a single catalog entry.
#[derive(Debug, Clone)]
pub struct Session {
    category_id: String,
    entry_id: String,
    question_ids: Vec<String>,
    allow_retreat: bool,
    answers: BTreeMap<String, usize>,
    state: SessionState,
}

impl Session {
    /// Start a fresh attempt positioned at the first question.
    ///
    /// Callers go through the engine façade, which checks that the
    /// (category, entry) pair exists before constructing the session.
    pub fn new(
        category_id: impl Into<String>,
        entry_id: impl Into<String>,
        question_ids: Vec<String>,
        allow_retreat: bool,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            entry_id: entry_id.into(),
            question_ids,
            allow_retreat,
            answers: BTreeMap::new(),
            state: SessionState::InProgress { index: 0 },
        }
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn entry_id(&self) -> &str {
        &self.entry_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// The question the session is positioned at, if in progress.
    pub fn current_question_id(&self) -> Option<&str> {
        match self.state {
            SessionState::InProgress { index } => {
                self.question_ids.get(index).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Recorded answers as question id → selected option index.
    pub fn answers(&self) -> &BTreeMap<String, usize> {
        &self.answers
    }

    /// Whether `Advance` would move forward: in progress and the current
    /// question has a recorded answer. A blocked advance is an expected UI
    /// condition, not an error.
    pub fn can_advance(&self) -> bool {
        self.current_question_id()
            .is_some_and(|id| self.answers.contains_key(id))
    }

    /// Apply one event and return the resulting state.
    ///
    /// Invalid events for the current state are no-ops: the state machine
    /// never panics and never throws on expected UI conditions.
    pub fn apply(&mut self, event: SessionEvent) -> SessionState {
        self.state = match (self.state, event) {
            (SessionState::InProgress { index }, SessionEvent::Answer { question_id, choice }) => {
                if self.question_ids.contains(&question_id) {
                    self.answers.insert(question_id, choice);
                } else {
                    tracing::debug!("ignoring answer for unknown question {question_id}");
                }
                SessionState::InProgress { index }
            }
            (SessionState::InProgress { index }, SessionEvent::Advance) => {
                let answered = self
                    .question_ids
                    .get(index)
                    .is_some_and(|id| self.answers.contains_key(id));
                if !answered {
                    SessionState::InProgress { index }
                } else if index + 1 >= self.question_ids.len() {
                    SessionState::Completed
                } else {
                    SessionState::InProgress { index: index + 1 }
                }
            }
            (SessionState::InProgress { index }, SessionEvent::Retreat) => {
                if self.allow_retreat && index > 0 {
                    SessionState::InProgress { index: index - 1 }
                } else {
                    SessionState::InProgress { index }
                }
            }
            (_, SessionEvent::Reset) => {
                self.answers.clear();
                SessionState::Idle
            }
            (state, _) => state,
        };
        self.state
    }
}
