//! Engine error types.
//!
//! Only genuinely exceptional conditions surface as errors. A blocked
//! `advance` (no answer recorded yet) is an expected UI condition and is
//! reported through [`crate::session::Session::can_advance`] instead.

use thiserror::Error;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested (category, entry) pair does not exist in the catalog.
    #[error("unknown entry: {category_id}/{entry_id}")]
    NotFound {
        category_id: String,
        entry_id: String,
    },

    /// The selected option index is out of range for the current question.
    #[error("question {question_id} has no option {choice}")]
    InvalidChoice { question_id: String, choice: usize },
}

impl EngineError {
    /// Returns `true` if this error means the caller should re-prompt the
    /// category/entry selection.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}
