//! Capabilities supplied by external collaborators.
//!
//! Ranking consumes review understanding only through these two traits. Both
//! are shared read-only across threads, so implementations must be `Send +
//! Sync` and must not rely on `&mut self`.

use thiserror::Error;

use crate::{AnnotatedReview, AttributeScores, Review};

/// A collaborator failed to produce a result.
///
/// Ranking absorbs this error: the affected reviews fall back to neutral
/// values and the condition is reported as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The capability was never initialised (model missing, load failure).
    #[error("{capability} is unavailable: {reason}")]
    Unavailable {
        /// Name of the capability.
        capability: &'static str,
        /// Human-readable cause.
        reason: String,
    },
    /// A single call failed.
    #[error("{capability} call failed: {reason}")]
    CallFailed {
        /// Name of the capability.
        capability: &'static str,
        /// Human-readable cause.
        reason: String,
    },
}

/// Score how strongly a review exhibits each predefined attribute.
///
/// Ranking only calls this for reviews with non-blank text. Implementations
/// should still return zeros for blank input.
///
/// Implementations should:
/// - Return a value for every attribute the caller cares about.
/// - Keep values finite and within `0.0..=1.0`.
///
/// Out-of-range values are clamped and missing attributes read as `0.0`.
///
/// # Examples
///
/// ```rust
/// use placerank_core::{AttributeScorer, AttributeScores, CollaboratorError};
///
/// struct Constant;
///
/// impl AttributeScorer for Constant {
///     fn score_review(&self, _text: &str) -> Result<AttributeScores, CollaboratorError> {
///         Ok(AttributeScores::from([("Cozy".to_owned(), 0.5)]))
///     }
/// }
///
/// let scores = Constant.score_review("warm and snug").expect("scores");
/// assert_eq!(scores.get("Cozy"), Some(&0.5));
/// ```
pub trait AttributeScorer: Send + Sync {
    /// Return per-attribute similarity for `text`.
    ///
    /// # Errors
    /// Returns [`CollaboratorError`] when the underlying model cannot score
    /// the text.
    fn score_review(&self, text: &str) -> Result<AttributeScores, CollaboratorError>;
}

/// Attach a sentiment polarity to each review.
///
/// The returned sequence must have the same length and order as the input.
/// Reviews with blank or absent text receive `0.5`.
pub trait SentimentScorer: Send + Sync {
    /// Return annotated copies of `reviews`.
    ///
    /// # Errors
    /// Returns [`CollaboratorError`] when the capability cannot run at all.
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError>;
}

impl<T: AttributeScorer + ?Sized> AttributeScorer for &T {
    fn score_review(&self, text: &str) -> Result<AttributeScores, CollaboratorError> {
        (**self).score_review(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        (**self).annotate(reviews)
    }
}

impl<T: AttributeScorer + ?Sized> AttributeScorer for Box<T> {
    fn score_review(&self, text: &str) -> Result<AttributeScores, CollaboratorError> {
        (**self).score_review(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    fn annotate(&self, reviews: &[Review]) -> Result<Vec<AnnotatedReview>, CollaboratorError> {
        (**self).annotate(reviews)
    }
}
