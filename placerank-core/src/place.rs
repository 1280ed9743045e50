//! Candidate places, their reviews, and the score breakdown attached after
//! ranking.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{BudgetLevel, GeoPoint};

/// Descriptive fields carried through ranking untouched.
pub type Extra = Map<String, Value>;

/// A free-text review.
///
/// Text may be absent; [`Review::content`] hides blank text from callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    /// Review body as written by the reviewer.
    #[serde(default)]
    pub text: Option<String>,
    /// Any other fields supplied with the review.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Review {
    /// Construct a review from text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            extra: Extra::new(),
        }
    }

    /// Construct a review without text.
    #[must_use]
    pub fn without_text() -> Self {
        Self::default()
    }

    /// Return the text when it contains anything other than whitespace.
    ///
    /// # Examples
    /// ```
    /// use placerank_core::Review;
    ///
    /// assert_eq!(Review::new(" cosy ").content(), Some(" cosy "));
    /// assert!(Review::new("   ").content().is_none());
    /// assert!(Review::without_text().content().is_none());
    /// ```
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// A review paired with the sentiment polarity derived from it.
///
/// `sentiment_score` is `None` when the sentiment capability could not
/// produce a value; aggregation treats that as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedReview {
    /// The source review.
    #[serde(flatten)]
    pub review: Review,
    /// Polarity in `0.0..=1.0` (`0` negative, `1` positive).
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

impl AnnotatedReview {
    /// Attach a sentiment score to `review`.
    #[must_use]
    pub const fn new(review: Review, sentiment_score: f64) -> Self {
        Self {
            review,
            sentiment_score: Some(sentiment_score),
        }
    }

    /// Wrap `review` without a score.
    #[must_use]
    pub const fn unscored(review: Review) -> Self {
        Self {
            review,
            sentiment_score: None,
        }
    }
}

/// Rounded scores explaining a place's rank.
///
/// Every value lies in `0.0..=1.0` and is rounded to four decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Weighted combination of the four components.
    pub final_score: f64,
    /// Average review sentiment.
    pub sentiment_score: f64,
    /// Match between the user's preferences and the place's attributes.
    pub preference_score: f64,
    /// Closeness of the place to the user.
    pub proximity_score: f64,
    /// Compatibility of price tiers.
    pub budget_score: f64,
}

/// Errors returned by [`Place::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceValidationError {
    /// The place name was empty or whitespace.
    #[error("place name must not be blank")]
    BlankName,
}

/// A candidate place to rank.
///
/// # Examples
/// ```
/// use placerank_core::{BudgetLevel, GeoPoint, Place, Review};
///
/// let place = Place::new("The Grand Cafe")
///     .with_review(Review::new("Very trendy spot"))
///     .with_budget(BudgetLevel::MAX)
///     .with_location(GeoPoint::new(30.0444, 31.2357).expect("valid point"));
/// assert_eq!(place.reviews.len(), 1);
/// assert!(place.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name; identifies the place in results.
    pub name: String,
    /// Reviews in the order they were collected.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Price tier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetLevel>,
    /// Position, when known.
    #[serde(
        default,
        rename = "coords",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<GeoPoint>,
    /// Breakdown attached by the ranking engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_details: Option<ScoreBreakdown>,
    /// Other descriptive fields (address, rating, ...) passed through.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Place {
    /// Construct a place with no reviews, budget, or location.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reviews: Vec::new(),
            budget: None,
            location: None,
            scoring_details: None,
            extra: Extra::new(),
        }
    }

    /// Append a review while returning `self` for chaining.
    #[must_use]
    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }

    /// Set the budget tier while returning `self` for chaining.
    #[must_use]
    pub const fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Set the position while returning `self` for chaining.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Check the record carries the fields ranking relies on.
    ///
    /// # Errors
    /// Returns [`PlaceValidationError::BlankName`] when the name is blank.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlaceValidationError::BlankName);
        }
        Ok(())
    }
}
