//! Facade crate for the placerank place-recommendation engine.
//!
//! This crate re-exports the domain records and capability traits from
//! `placerank-core` together with the scoring components and ranking engine
//! from `placerank-scorer`.
//!
//! # Examples
//!
//! ```
//! use placerank::{
//!     BudgetLevel, KeywordAttributeScorer, NeutralSentimentScorer, Place, RankRequest,
//!     RankingConfig, RankingEngine, UserProfile,
//! };
//!
//! let engine = RankingEngine::new(
//!     RankingConfig::default(),
//!     KeywordAttributeScorer::default(),
//!     NeutralSentimentScorer,
//! )
//! .expect("valid configuration");
//! let request = RankRequest::new(
//!     UserProfile::new().with_budget(BudgetLevel::MAX),
//!     vec![Place::new("Somewhere").with_budget(BudgetLevel::MAX)],
//! );
//! let ranking = engine.rank(&request).expect("ranked");
//! assert_eq!(ranking.places.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use placerank_core::{
    AnnotatedReview, AttributeProfile, AttributeScorer, AttributeScores, AttributeSet,
    AttributeSetError, BudgetLevel, BudgetLevelError, CollaboratorError, GeoPoint, GeoPointError,
    Place, PlaceValidationError, Review, ScoreBreakdown, SentimentScorer, UserProfile,
    UserProfileError,
};

#[cfg(feature = "test-support")]
pub use placerank_core::test_support;

pub use placerank_scorer::{
    ComponentScores, ConfigError, DefaultPolicy, KeywordAttributeScorer, Language,
    LexiconSentimentScorer, NeutralSentimentScorer, PlaceScore, RankRequest, Ranking,
    RankingConfig, RankingEngine, RankingError, RankingWarning, WEIGHTS, budget_score,
    build_attribute_profile, haversine_km, preference_score, proximity_score, rank_places,
    sentiment_score,
};
