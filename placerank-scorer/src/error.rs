//! Errors raised while configuring the engine or accepting a ranking request.

use placerank_core::{AttributeSetError, PlaceValidationError, UserProfileError};
use thiserror::Error;

/// Configuration the engine refuses to start with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The attribute vocabulary was empty or malformed.
    #[error("invalid attribute set: {0}")]
    Attributes(#[from] AttributeSetError),
    /// The proximity cutoff was not a positive finite distance.
    #[error("max distance must be a positive number of kilometres, got {0}")]
    MaxDistance(f64),
    /// The neutral sentiment fallback was outside `0.0..=1.0`.
    #[error("neutral sentiment must be within 0..=1, got {0}")]
    NeutralSentiment(f64),
    /// The missing-location proximity fallback was outside `0.0..=1.0`.
    #[error("missing-location proximity must be within 0..=1, got {0}")]
    MissingLocationProximity(f64),
}

/// Reasons a ranking request is rejected before any place is scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The request contained no candidate places.
    #[error("no candidate places to rank")]
    NoCandidates,
    /// The user profile failed validation.
    #[error("invalid user profile: {0}")]
    InvalidUser(#[source] UserProfileError),
    /// A place record failed validation.
    #[error("place at index {index} is invalid: {source}")]
    InvalidPlace {
        /// Position of the place in the request.
        index: usize,
        /// Validation failure.
        #[source]
        source: PlaceValidationError,
    },
    /// The request overrode the cutoff with an unusable distance.
    #[error("requested max distance must be a positive number of kilometres, got {0}")]
    InvalidMaxDistance(f64),
    /// The engine could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
