//! Score-driven resource suggestions.
//!
//! The two catalog kinds trigger in opposite directions on purpose:
//! assessments reward confident areas with deeper material (suggest when the
//! score ratio is high), while quizzes remediate weak areas (suggest when
//! the ratio is low). Both thresholds come from the source behavior and must
//! not drift.

use crate::model::{CatalogKind, Category, Suggestion};

/// Assessments suggest when `score / max` is strictly above this ratio.
pub const ASSESSMENT_SUGGEST_ABOVE: f64 = 0.60;

/// Quizzes suggest when `score / max` is strictly below this ratio.
pub const QUIZ_SUGGEST_BELOW: f64 = 0.70;

/// Suggestions for a finished session in the given category.
pub fn suggest(
    kind: CatalogKind,
    category: &Category,
    total_score: u32,
    max_score: u32,
) -> Vec<Suggestion> {
    let Some(suggestion) = &category.suggestion else {
        return Vec::new();
    };
    if max_score == 0 {
        return Vec::new();
    }

    let ratio = f64::from(total_score) / f64::from(max_score);
    let triggered = match kind {
        CatalogKind::Assessment => ratio > ASSESSMENT_SUGGEST_ABOVE,
        CatalogKind::Quiz => ratio < QUIZ_SUGGEST_BELOW,
    };

    if triggered {
        vec![suggestion.clone()]
    } else {
        Vec::new()
    }
}
