//! Core domain types for the placerank engine.
//!
//! Records here describe what is ranked (places and their reviews), who it is
//! ranked for (a user profile), and the vocabulary both share (an attribute
//! set). The two capability traits are the only way ranking reaches the
//! review-understanding models. Constructors and `validate` methods return
//! `Result` so malformed records are rejected where they enter the system.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attributes;
pub mod budget;
pub mod capability;
pub mod location;
pub mod place;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod user;

pub use attributes::{AttributeProfile, AttributeScores, AttributeSet, AttributeSetError};
pub use budget::{BudgetLevel, BudgetLevelError};
pub use capability::{AttributeScorer, CollaboratorError, SentimentScorer};
pub use location::{GeoPoint, GeoPointError};
pub use place::{AnnotatedReview, Extra, Place, PlaceValidationError, Review, ScoreBreakdown};
pub use user::{UserProfile, UserProfileError};

/// Clamp a raw score into `0.0..=1.0`, mapping non-finite values to `0.0`.
///
/// # Examples
/// ```
/// use placerank_core::unit_interval;
///
/// assert_eq!(unit_interval(1.4), 1.0);
/// assert_eq!(unit_interval(-0.2), 0.0);
/// assert_eq!(unit_interval(f64::NAN), 0.0);
/// assert_eq!(unit_interval(0.25), 0.25);
/// ```
#[must_use]
pub const fn unit_interval(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}
