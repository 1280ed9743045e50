//! Scoring and ranking of candidate places.
//!
//! Five small components each reduce one signal to a value in `0.0..=1.0`:
//! - [`build_attribute_profile`] averages per-review attribute similarity.
//! - [`preference_score`] projects the user's weights onto that profile.
//! - [`proximity_score`] decays linearly with haversine distance.
//! - [`budget_score`] decays linearly with price-tier distance.
//! - [`sentiment_score`] averages per-review polarity.
//!
//! [`ComponentScores::combine`] weights them with [`WEIGHTS`] into a rounded
//! [`ScoreBreakdown`](placerank_core::ScoreBreakdown), and [`RankingEngine`]
//! applies the pipeline to every place in a [`RankRequest`] before sorting.
//!
//! The [`heuristic`] module supplies deterministic collaborators for use
//! without hosted models.
//!
//! # Examples
//!
//! ```
//! use placerank_core::{BudgetLevel, GeoPoint, Place, Review, UserProfile};
//! use placerank_scorer::{
//!     KeywordAttributeScorer, LexiconSentimentScorer, RankRequest, RankingConfig, RankingEngine,
//! };
//!
//! let engine = RankingEngine::new(
//!     RankingConfig::default().with_max_distance_km(50.0),
//!     KeywordAttributeScorer::default(),
//!     LexiconSentimentScorer::default(),
//! )
//! .expect("valid configuration");
//!
//! let downtown = GeoPoint::new(30.0444, 31.2357).expect("valid point");
//! let user = UserProfile::new()
//!     .with_preference("Cozy", 1.0)
//!     .with_budget(BudgetLevel::default())
//!     .with_location(downtown);
//! let places = vec![
//!     Place::new("Loud Bar").with_review(Review::new("Terrible and noisy")),
//!     Place::new("Corner Cafe")
//!         .with_review(Review::new("A cozy spot with excellent tea"))
//!         .with_location(downtown),
//! ];
//!
//! let ranking = engine.rank(&RankRequest::new(user, places)).expect("ranked");
//! assert_eq!(ranking.places.first().map(|p| p.name.as_str()), Some("Corner Cafe"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod budget;
mod combine;
mod config;
mod engine;
mod error;
pub mod heuristic;
mod preference;
mod profile;
mod proximity;
mod sentiment;

pub use budget::budget_score;
pub use combine::{CombinerWeights, ComponentScores, WEIGHTS, round4};
pub use config::{DEFAULT_MAX_DISTANCE_KM, DefaultPolicy, RankingConfig};
pub use engine::{PlaceScore, RankRequest, Ranking, RankingEngine, RankingWarning, rank_places};
pub use error::{ConfigError, RankingError};
pub use heuristic::{
    KeywordAttributeScorer, Language, Lexicon, LexiconSentimentScorer, NeutralSentimentScorer,
    detect_language,
};
pub use preference::preference_score;
pub use profile::{ReviewFailure, build_attribute_profile, build_attribute_profile_reporting};
pub use proximity::{EARTH_RADIUS_KM, haversine_km, proximity_score};
pub use sentiment::{NEUTRAL_SENTIMENT, sentiment_score, sentiment_score_with};
