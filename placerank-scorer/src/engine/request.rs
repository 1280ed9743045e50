//! Request, response, and warning records exchanged with the engine.

use std::fmt;

use placerank_core::{Place, UserProfile};
use serde::{Deserialize, Serialize};

/// Places to rank for one user.
///
/// The user profile fields sit at the top level of the JSON request next to
/// `places`.
///
/// # Examples
/// ```
/// use placerank_scorer::RankRequest;
///
/// let request: RankRequest = serde_json::from_str(
///     r#"{
///         "preferences": {"Cozy": 1.0},
///         "budget": 1,
///         "coords": [30.0444, 31.2357],
///         "places": [{"name": "Cafe Riche"}],
///         "max_distance_km": 50.0
///     }"#,
/// )
/// .expect("valid request");
/// assert_eq!(request.places.len(), 1);
/// assert_eq!(request.max_distance_km, Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    /// Who the ranking is for.
    #[serde(flatten)]
    pub user: UserProfile,
    /// Candidate places, already filtered by the caller.
    #[serde(default)]
    pub places: Vec<Place>,
    /// Overrides the engine's proximity cutoff for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_km: Option<f64>,
}

impl RankRequest {
    /// Build a request using the engine's default cutoff.
    #[must_use]
    pub const fn new(user: UserProfile, places: Vec<Place>) -> Self {
        Self {
            user,
            places,
            max_distance_km: None,
        }
    }

    /// Override the proximity cutoff for this request.
    #[must_use]
    pub const fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = Some(max_distance_km);
        self
    }
}

/// Ranked places and the non-fatal problems met while scoring them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Places sorted by descending final score, each with its breakdown.
    #[serde(rename = "recommendations")]
    pub places: Vec<Place>,
    /// Collaborator failures absorbed while scoring.
    #[serde(default)]
    pub warnings: Vec<RankingWarning>,
}

/// A collaborator failure that degraded a place's scores without stopping
/// the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RankingWarning {
    /// A review was left out of the attribute profile.
    AttributeScoringFailed {
        /// Name of the affected place.
        place: String,
        /// Position of the review within the place's reviews.
        review_index: usize,
        /// Error reported by the attribute scorer.
        reason: String,
    },
    /// The sentiment scorer failed; the place's reviews read as neutral.
    SentimentScoringFailed {
        /// Name of the affected place.
        place: String,
        /// Error reported by the sentiment scorer.
        reason: String,
    },
    /// The sentiment scorer returned the wrong number of reviews; the
    /// place's reviews read as neutral.
    SentimentLengthMismatch {
        /// Name of the affected place.
        place: String,
        /// Reviews sent to the scorer.
        expected: usize,
        /// Reviews returned by the scorer.
        actual: usize,
    },
}

impl RankingWarning {
    /// Name of the place the warning concerns.
    #[must_use]
    pub fn place(&self) -> &str {
        match self {
            Self::AttributeScoringFailed { place, .. }
            | Self::SentimentScoringFailed { place, .. }
            | Self::SentimentLengthMismatch { place, .. } => place,
        }
    }
}

impl fmt::Display for RankingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeScoringFailed {
                place,
                review_index,
                reason,
            } => write!(
                f,
                "{place}: review {review_index} skipped by attribute scoring: {reason}"
            ),
            Self::SentimentScoringFailed { place, reason } => {
                write!(f, "{place}: sentiment defaulted to neutral: {reason}")
            }
            Self::SentimentLengthMismatch {
                place,
                expected,
                actual,
            } => write!(
                f,
                "{place}: sentiment scorer returned {actual} of {expected} reviews; defaulted to neutral"
            ),
        }
    }
}
