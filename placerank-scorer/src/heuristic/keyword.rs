//! Attribute scoring by attribute-name occurrence.

use placerank_core::{
    AttributeScorer, AttributeScores, AttributeSet, CollaboratorError, unit_interval,
};

/// Score assigned when a review mentions an attribute.
const DEFAULT_MATCH_SCORE: f64 = 0.8;
/// Score assigned when it does not.
const DEFAULT_MISS_SCORE: f64 = 0.1;

/// [`AttributeScorer`] that looks for each attribute's name in the review.
///
/// Matching is case-insensitive, and hyphenated names also match with the
/// hyphen written as a space ("family friendly" matches `Family-Friendly`).
///
/// # Examples
/// ```
/// use placerank_core::AttributeScorer;
/// use placerank_scorer::KeywordAttributeScorer;
///
/// let scores = KeywordAttributeScorer::default()
///     .score_review("A cozy, family friendly corner")
///     .expect("keyword scoring never fails");
/// assert_eq!(scores.get("Cozy"), Some(&0.8));
/// assert_eq!(scores.get("Family-Friendly"), Some(&0.8));
/// assert_eq!(scores.get("Romantic"), Some(&0.1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordAttributeScorer {
    keywords: Vec<Keyword>,
    match_score: f64,
    miss_score: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Keyword {
    attribute: String,
    patterns: Vec<String>,
}

impl Keyword {
    fn new(attribute: &str) -> Self {
        let lowered = attribute.to_lowercase();
        let spaced = lowered.replace('-', " ");
        let mut patterns = vec![lowered];
        if !patterns.contains(&spaced) {
            patterns.push(spaced);
        }
        Self {
            attribute: attribute.to_owned(),
            patterns,
        }
    }

    fn occurs_in(&self, lowered_text: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| lowered_text.contains(pattern.as_str()))
    }
}

impl KeywordAttributeScorer {
    /// Scorer over `attributes` with the default scores.
    #[must_use]
    pub fn new(attributes: &AttributeSet) -> Self {
        Self {
            keywords: attributes.iter().map(Keyword::new).collect(),
            match_score: DEFAULT_MATCH_SCORE,
            miss_score: DEFAULT_MISS_SCORE,
        }
    }

    /// Override the scores for mentioned and unmentioned attributes.
    ///
    /// Both values are clamped into `0.0..=1.0`.
    #[must_use]
    pub const fn with_scores(mut self, match_score: f64, miss_score: f64) -> Self {
        self.match_score = unit_interval(match_score);
        self.miss_score = unit_interval(miss_score);
        self
    }
}

impl Default for KeywordAttributeScorer {
    fn default() -> Self {
        Self::new(&AttributeSet::catalogue())
    }
}

impl AttributeScorer for KeywordAttributeScorer {
    fn score_review(&self, text: &str) -> Result<AttributeScores, CollaboratorError> {
        if text.trim().is_empty() {
            return Ok(self
                .keywords
                .iter()
                .map(|keyword| (keyword.attribute.clone(), 0.0))
                .collect());
        }
        let lowered = text.to_lowercase();
        Ok(self
            .keywords
            .iter()
            .map(|keyword| {
                let score = if keyword.occurs_in(&lowered) {
                    self.match_score
                } else {
                    self.miss_score
                };
                (keyword.attribute.clone(), score)
            })
            .collect())
    }
}
