//! Deterministic capability fakes used by unit, behaviour, and property
//! tests.

use std::collections::HashMap;

use crate::{
    AnnotatedReview, AttributeScorer, AttributeScores, CollaboratorError, Review, SentimentScorer,
};

/// Neutral polarity assigned to blank reviews.
const NEUTRAL: f64 = 0.5;

/// `AttributeScorer` returning canned scores per exact review text.
///
/// Unknown texts score an empty map, which reads as all zeros.
#[derive(Debug, Clone, Default)]
pub struct FixedAttributeScorer {
    scores: HashMap<String, AttributeScores>,
}

impl FixedAttributeScorer {
    /// Create a scorer with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the scores returned for `text`.
    #[must_use]
    pub fn with_review<I, K>(mut self, text: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let scores = entries
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        self.scores.insert(text.into(), scores);
        self
    }
}

impl AttributeScorer for FixedAttributeScorer {
    fn score_review(&self, text: &str) -> Result<AttributeScores, CollaboratorError> {
        Ok(self.scores.get(text).cloned().unwrap_or_default())
    }
}

/// `SentimentScorer` returning canned polarities per exact review text.
///
/// Blank reviews and unknown texts receive `0.5`.
#[derive(Debug, Clone, Default)]
pub struct FixedSentimentScorer {
    scores: HashMap<String, f64>,
}

impl FixedSentimentScorer {
    /// Create a scorer with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the polarity returned for `text`.
    #[must_use]
    pub fn with_review(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }
}

impl SentimentScorer for FixedSentimentScorer {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        Ok(reviews
            .iter()
            .map(|review| {
                let score = review
                    .content()
                    .and_then(|text| self.scores.get(text).copied())
                    .unwrap_or(NEUTRAL);
                AnnotatedReview::new(review.clone(), score)
            })
            .collect())
    }
}

/// Capability that fails every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScorer;

impl UnavailableScorer {
    fn error(capability: &'static str) -> CollaboratorError {
        CollaboratorError::Unavailable {
            capability,
            reason: "model not loaded".to_owned(),
        }
    }
}

impl AttributeScorer for UnavailableScorer {
    fn score_review(&self, _text: &str) -> Result<AttributeScores, CollaboratorError> {
        Err(Self::error("attribute scorer"))
    }
}

impl SentimentScorer for UnavailableScorer {
    fn annotate(&self, _reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        Err(Self::error("sentiment scorer"))
    }
}

/// `SentimentScorer` that drops the first review, breaking the length
/// contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingSentimentScorer;

impl SentimentScorer for TruncatingSentimentScorer {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        Ok(reviews
            .iter()
            .skip(1)
            .map(|review| AnnotatedReview::new(review.clone(), 1.0))
            .collect())
    }
}
