//! Core data model types for wellcheck.
//!
//! These are the fundamental types the engine uses to represent the content
//! catalog: categories, question entries, score bands, and badge rules. The
//! catalog is immutable content supplied externally and validated once at
//! load time by the [`crate::parser`] module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of catalog this is.
///
/// Assessments sum option scores and classify the total into a band; quizzes
/// count correct answers and carry no bands. The two kinds keep separate
/// progress records under distinct storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Assessment,
    Quiz,
}

impl CatalogKind {
    /// Whether sessions of this kind may navigate back to earlier questions.
    pub fn allows_retreat(self) -> bool {
        matches!(self, CatalogKind::Assessment)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Assessment => write!(f, "assessment"),
            CatalogKind::Quiz => write!(f, "quiz"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assessment" => Ok(CatalogKind::Assessment),
            "quiz" => Ok(CatalogKind::Quiz),
            other => Err(format!("unknown catalog kind: {other}")),
        }
    }
}

/// A complete content catalog: ordered categories plus catalog-wide badge
/// rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Whether this catalog holds assessments or quizzes.
    pub kind: CatalogKind,
    /// Catalog-wide badge rules (volume, completeness).
    #[serde(default)]
    pub badges: Vec<BadgeRule>,
    /// Ordered categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Look up an entry by its (category, entry) pair.
    pub fn find_entry(&self, category_id: &str, entry_id: &str) -> Option<(&Category, &Entry)> {
        let category = self.categories.iter().find(|c| c.id == category_id)?;
        let entry = category.entries.iter().find(|e| e.id == entry_id)?;
        Some((category, entry))
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Iterate over all (category, entry) pairs in catalog order.
    pub fn iter_entries(&self) -> impl Iterator<Item = (&Category, &Entry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c, e)))
    }

    /// The full badge rule set: per-category badges (granted when every
    /// entry of the category is completed) followed by catalog-wide rules.
    pub fn badge_rules(&self) -> Vec<BadgeRule> {
        let mut rules: Vec<BadgeRule> = self
            .categories
            .iter()
            .filter_map(|c| {
                c.badge.as_ref().map(|badge| BadgeRule {
                    badge: badge.clone(),
                    rule: BadgeRuleKind::CategoryComplete {
                        category_id: c.id.clone(),
                    },
                })
            })
            .collect();
        rules.extend(self.badges.iter().cloned());
        rules
    }
}

/// A category: a themed group of assessment or quiz entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description shown on category selection.
    #[serde(default)]
    pub description: String,
    /// Badge granted when every entry of this category has been completed.
    #[serde(default)]
    pub badge: Option<Badge>,
    /// Follow-up resource suggested based on the session score.
    #[serde(default)]
    pub suggestion: Option<Suggestion>,
    /// Ordered entries belonging to this category.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A single assessment or quiz: an ordered question sequence plus result
/// classification content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within the category.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Reflective note shown alongside the result.
    #[serde(default)]
    pub reflective_tip: Option<String>,
    /// Score bands (assessments only). Must start at 0, be contiguous, and
    /// cover the full reachable score range.
    #[serde(default)]
    pub bands: Vec<ScoreBand>,
    /// Ordered questions.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Entry {
    /// The highest total score reachable for this entry.
    pub fn max_score(&self, kind: CatalogKind) -> u32 {
        match kind {
            CatalogKind::Assessment => self
                .questions
                .iter()
                .map(|q| q.options.iter().filter_map(|o| o.score).max().unwrap_or(0))
                .sum(),
            CatalogKind::Quiz => self.questions.len() as u32,
        }
    }
}

/// A single question with its answer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the entry.
    pub id: String,
    /// Prompt text.
    pub prompt: String,
    /// Ordered answer options.
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Index of the correct option (quizzes only).
    #[serde(default)]
    pub correct_index: Option<usize>,
}

/// One selectable answer option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option text.
    pub label: String,
    /// Score contributed when selected (assessments only).
    #[serde(default)]
    pub score: Option<u32>,
}

/// A contiguous score interval mapped to a qualitative result level with
/// tailored guidance (assessments only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBand {
    /// Lowest total score in this band (inclusive).
    pub min: u32,
    /// Highest total score in this band (inclusive).
    pub max: u32,
    /// Qualitative level label (e.g. "Moderate").
    pub level: String,
    /// Guidance text for this level.
    #[serde(default)]
    pub description: String,
    /// Display color token.
    #[serde(default)]
    pub color: String,
    /// Recommended actions for this level.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ScoreBand {
    /// Whether the given total falls inside this band.
    pub fn contains(&self, total: u32) -> bool {
        self.min <= total && total <= self.max
    }
}

/// An unlockable achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Unique identifier within the catalog's badge set.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description of how the badge is earned.
    #[serde(default)]
    pub description: String,
    /// Display icon reference.
    #[serde(default)]
    pub icon: String,
}

/// A badge plus the predicate that grants it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRule {
    /// The badge granted when the rule is satisfied.
    #[serde(flatten)]
    pub badge: Badge,
    /// The predicate over the completion record.
    pub rule: BadgeRuleKind,
}

/// The predicate shapes observed in this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BadgeRuleKind {
    /// Every entry of the named category has been completed.
    CategoryComplete { category_id: String },
    /// At least `count` catalog entries have been completed overall.
    TotalAtLeast { count: usize },
    /// Every entry in the catalog has been completed.
    CatalogComplete,
}

/// A follow-up resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Resource title.
    pub title: String,
    /// Resource link.
    pub link: String,
}
