//! Pure scoring over a finished answer set.
//!
//! Assessments sum the selected option scores and classify the total into a
//! band; quizzes count answers matching the question's correct option. Band
//! lookup relies on the load-time catalog validation: a validated band table
//! is contiguous and covers the full score range, so exactly one band
//! matches any reachable total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Badge, CatalogKind, Entry, ScoreBand, Suggestion};

/// Total score for an assessment: sum of the selected option scores.
pub fn assessment_total(entry: &Entry, answers: &BTreeMap<String, usize>) -> u32 {
    entry
        .questions
        .iter()
        .filter_map(|q| {
            let choice = answers.get(&q.id)?;
            q.options.get(*choice).and_then(|o| o.score)
        })
        .sum()
}

/// Total score for a quiz: number of answers matching the correct option.
pub fn quiz_total(entry: &Entry, answers: &BTreeMap<String, usize>) -> u32 {
    entry
        .questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id)
                .is_some_and(|choice| q.correct_index == Some(*choice))
        })
        .count() as u32
}

/// Total score for an entry of the given kind.
pub fn total_score(kind: CatalogKind, entry: &Entry, answers: &BTreeMap<String, usize>) -> u32 {
    match kind {
        CatalogKind::Assessment => assessment_total(entry, answers),
        CatalogKind::Quiz => quiz_total(entry, answers),
    }
}

/// The band containing the given total, if any.
///
/// On a validated catalog this is `Some` for every total in range; `None`
/// can only mean the caller bypassed [`crate::parser::load_catalog`].
pub fn band_for(bands: &[ScoreBand], total: u32) -> Option<&ScoreBand> {
    bands.iter().find(|b| b.contains(total))
}

/// The terminal result object of a finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Achieved total.
    pub total_score: u32,
    /// Highest reachable total for this entry.
    pub max_score: u32,
    /// Matched score band (assessments only).
    pub band: Option<ScoreBand>,
    /// Follow-up resource suggestions derived from the score.
    pub suggestions: Vec<Suggestion>,
    /// Static reflective note for this entry.
    pub reflective_tip: Option<String>,
}

/// A finished session's outcome plus the badges it newly unlocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    pub outcome: SessionOutcome,
    pub newly_unlocked: Vec<Badge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Question};

    fn option(score: u32) -> AnswerOption {
        AnswerOption {
            label: format!("opt-{score}"),
            score: Some(score),
        }
    }

    fn scored_question(id: &str) -> Question {
        Question {
            id: id.into(),
            prompt: "?".into(),
            options: vec![option(0), option(1), option(2), option(3)],
            correct_index: None,
        }
    }

    fn quiz_question(id: &str, correct: usize) -> Question {
        Question {
            id: id.into(),
            prompt: "?".into(),
            options: vec![
                AnswerOption { label: "a".into(), score: None },
                AnswerOption { label: "b".into(), score: None },
                AnswerOption { label: "c".into(), score: None },
            ],
            correct_index: Some(correct),
        }
    }

    fn assessment_entry(question_count: usize) -> Entry {
        Entry {
            id: "e".into(),
            title: "E".into(),
            reflective_tip: None,
            bands: vec![
                band(0, 5, "High"),
                band(6, 10, "Moderate"),
                band(11, 15, "Low"),
            ],
            questions: (0..question_count)
                .map(|i| scored_question(&format!("q{}", i + 1)))
                .collect(),
        }
    }

    fn band(min: u32, max: u32, level: &str) -> ScoreBand {
        ScoreBand {
            min,
            max,
            level: level.into(),
            description: String::new(),
            color: String::new(),
            recommendations: vec![],
        }
    }

    fn answers(choices: &[usize]) -> BTreeMap<String, usize> {
        choices
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("q{}", i + 1), *c))
            .collect()
    }

    #[test]
    fn assessment_sums_selected_scores() {
        // Worked example: option scores 1,2,1,3,2 → total 9 of 15.
        let entry = assessment_entry(5);
        let total = assessment_total(&entry, &answers(&[1, 2, 1, 3, 2]));
        assert_eq!(total, 9);
        assert_eq!(band_for(&entry.bands, total).unwrap().level, "Moderate");
    }

    #[test]
    fn assessment_score_bounds_hold() {
        let entry = assessment_entry(5);
        let max = entry.max_score(CatalogKind::Assessment);
        assert_eq!(max, 15);
        assert_eq!(assessment_total(&entry, &answers(&[0, 0, 0, 0, 0])), 0);
        assert_eq!(assessment_total(&entry, &answers(&[3, 3, 3, 3, 3])), max);
    }

    #[test]
    fn every_total_matches_exactly_one_band() {
        let entry = assessment_entry(5);
        for total in 0..=entry.max_score(CatalogKind::Assessment) {
            let matching = entry.bands.iter().filter(|b| b.contains(total)).count();
            assert_eq!(matching, 1, "score {total} matched {matching} bands");
        }
    }

    #[test]
    fn quiz_counts_correct_answers() {
        // Worked example: correct indices 0,1,2 and answers 0,1,0 → 2 of 3.
        let entry = Entry {
            id: "basics".into(),
            title: "Basics".into(),
            reflective_tip: None,
            bands: vec![],
            questions: vec![
                quiz_question("q1", 0),
                quiz_question("q2", 1),
                quiz_question("q3", 2),
            ],
        };
        assert_eq!(quiz_total(&entry, &answers(&[0, 1, 0])), 2);
        assert_eq!(entry.max_score(CatalogKind::Quiz), 3);
    }

    #[test]
    fn unanswered_questions_contribute_nothing() {
        let entry = assessment_entry(3);
        let mut partial = BTreeMap::new();
        partial.insert("q2".to_string(), 3usize);
        assert_eq!(assessment_total(&entry, &partial), 3);

        let quiz = Entry {
            id: "q".into(),
            title: "Q".into(),
            reflective_tip: None,
            bands: vec![],
            questions: vec![quiz_question("q1", 1), quiz_question("q2", 1)],
        };
        let mut partial = BTreeMap::new();
        partial.insert("q1".to_string(), 1usize);
        assert_eq!(quiz_total(&quiz, &partial), 1);
    }

    #[test]
    fn band_for_returns_none_only_out_of_range() {
        let entry = assessment_entry(5);
        assert!(band_for(&entry.bands, 16).is_none());
    }
}
