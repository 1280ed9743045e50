//! `RankingEngine`: scores every candidate place and orders them.
//!
//! Per-place scoring reads only the place, the user, and the two shared
//! collaborators, so places are scored independently (on the rayon pool when
//! the configuration allows) and sorted once all scores are known.

use placerank_core::{
    AttributeProfile, AttributeScorer, AttributeSet, Place, ScoreBreakdown, SentimentScorer,
    UserProfile,
};
use rayon::prelude::*;

use crate::config::validate_max_distance;
use crate::{
    ComponentScores, ConfigError, RankingConfig, RankingError, budget_score,
    build_attribute_profile_reporting, preference_score, proximity_score, sentiment_score_with,
};

mod request;

pub use request::{RankRequest, Ranking, RankingWarning};

/// Scores for a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceScore {
    /// Rounded breakdown attached to the place.
    pub breakdown: ScoreBreakdown,
    /// Attribute profile built from the place's reviews.
    pub profile: AttributeProfile,
    /// Collaborator failures absorbed while scoring.
    pub warnings: Vec<RankingWarning>,
}

/// Ranks places for a user using injected review collaborators.
///
/// The engine is generic over the two capabilities so tests can substitute
/// deterministic fakes and deployments can share loaded models across
/// requests.
///
/// # Examples
/// ```
/// use placerank_core::{BudgetLevel, Place, UserProfile};
/// use placerank_scorer::{
///     KeywordAttributeScorer, NeutralSentimentScorer, RankRequest, RankingConfig, RankingEngine,
/// };
///
/// let engine = RankingEngine::new(
///     RankingConfig::default(),
///     KeywordAttributeScorer::default(),
///     NeutralSentimentScorer,
/// )
/// .expect("valid configuration");
/// let user = UserProfile::new().with_budget(BudgetLevel::MIN);
/// let places = vec![
///     Place::new("Costly").with_budget(BudgetLevel::MAX),
///     Place::new("Cheap").with_budget(BudgetLevel::MIN),
/// ];
///
/// let ranking = engine.rank(&RankRequest::new(user, places)).expect("ranked");
/// assert_eq!(ranking.places[0].name, "Cheap");
/// ```
#[derive(Debug, Clone)]
pub struct RankingEngine<A, S>
where
    A: AttributeScorer,
    S: SentimentScorer,
{
    config: RankingConfig,
    attribute_scorer: A,
    sentiment_scorer: S,
}

impl<A, S> RankingEngine<A, S>
where
    A: AttributeScorer,
    S: SentimentScorer,
{
    /// Construct an engine after validating `config`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration cannot produce
    /// meaningful scores.
    pub fn new(
        config: RankingConfig,
        attribute_scorer: A,
        sentiment_scorer: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            attribute_scorer,
            sentiment_scorer,
        })
    }

    /// Configuration the engine was built with.
    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score one place for `user` without ranking.
    ///
    /// Collaborator failures are absorbed into neutral values and reported
    /// in [`PlaceScore::warnings`]; each one is also logged.
    #[must_use]
    pub fn score_place(
        &self,
        user: &UserProfile,
        place: &Place,
        max_distance_km: f64,
    ) -> PlaceScore {
        let defaults = self.config.defaults;
        let mut warnings = Vec::new();

        let (profile, failures) = build_attribute_profile_reporting(
            &place.reviews,
            &self.attribute_scorer,
            &self.config.attributes,
        );
        warnings.extend(failures.into_iter().map(|failure| {
            logged(RankingWarning::AttributeScoringFailed {
                place: place.name.clone(),
                review_index: failure.review_index,
                reason: failure.error.to_string(),
            })
        }));

        let sentiment = self.place_sentiment(place, &mut warnings);
        let preference = preference_score(&user.preferences, &profile, &self.config.attributes);
        let proximity = match (user.location, place.location) {
            (Some(from), Some(to)) => proximity_score(from, to, max_distance_km),
            _ => defaults.missing_location_proximity,
        };
        let budget = budget_score(
            user.budget.unwrap_or(defaults.default_budget),
            place.budget.unwrap_or(defaults.default_budget),
        );

        let breakdown = ComponentScores {
            sentiment,
            preference,
            proximity,
            budget,
        }
        .combine();
        PlaceScore {
            breakdown,
            profile,
            warnings,
        }
    }

    /// Rank the places in `request`.
    ///
    /// Every place receives a `scoring_details` breakdown. Places are
    /// returned by descending final score; places with equal scores keep
    /// their request order.
    ///
    /// # Errors
    /// Returns [`RankingError::NoCandidates`] for an empty request, or a
    /// validation error when the user, a place, or the requested cutoff is
    /// unusable. Collaborator failures never cause an error.
    pub fn rank(&self, request: &RankRequest) -> Result<Ranking, RankingError> {
        let max_distance_km = request.max_distance_km.map_or(
            Ok(self.config.max_distance_km),
            |km| {
                validate_max_distance(km)
                    .map(|()| km)
                    .map_err(|_| RankingError::InvalidMaxDistance(km))
            },
        )?;
        self.rank_within(&request.user, &request.places, max_distance_km)
    }

    fn rank_within(
        &self,
        user: &UserProfile,
        places: &[Place],
        max_distance_km: f64,
    ) -> Result<Ranking, RankingError> {
        if places.is_empty() {
            return Err(RankingError::NoCandidates);
        }
        user.validate().map_err(RankingError::InvalidUser)?;
        for (index, place) in places.iter().enumerate() {
            place
                .validate()
                .map_err(|source| RankingError::InvalidPlace { index, source })?;
        }

        let scores: Vec<PlaceScore> = if self.config.parallel {
            places
                .par_iter()
                .map(|place| self.score_place(user, place, max_distance_km))
                .collect()
        } else {
            places
                .iter()
                .map(|place| self.score_place(user, place, max_distance_km))
                .collect()
        };

        let mut warnings = Vec::new();
        let mut scored: Vec<(ScoreBreakdown, &Place)> = scores
            .into_iter()
            .zip(places)
            .map(|(score, place)| {
                warnings.extend(score.warnings);
                (score.breakdown, place)
            })
            .collect();
        scored.sort_by(|(left, _), (right, _)| right.final_score.total_cmp(&left.final_score));

        let ranked: Vec<Place> = scored
            .into_iter()
            .map(|(breakdown, place)| {
                let mut record = place.clone();
                record.scoring_details = Some(breakdown);
                record
            })
            .collect();
        log::debug!(
            "ranked {} places within {max_distance_km} km with {} warnings",
            ranked.len(),
            warnings.len()
        );
        Ok(Ranking {
            places: ranked,
            warnings,
        })
    }

    fn place_sentiment(&self, place: &Place, warnings: &mut Vec<RankingWarning>) -> f64 {
        let neutral = self.config.defaults.neutral_sentiment;
        if place.reviews.is_empty() {
            return neutral;
        }
        match self.sentiment_scorer.annotate(&place.reviews) {
            Ok(annotated) if annotated.len() == place.reviews.len() => {
                sentiment_score_with(&annotated, neutral)
            }
            Ok(annotated) => {
                warnings.push(logged(RankingWarning::SentimentLengthMismatch {
                    place: place.name.clone(),
                    expected: place.reviews.len(),
                    actual: annotated.len(),
                }));
                neutral
            }
            Err(error) => {
                warnings.push(logged(RankingWarning::SentimentScoringFailed {
                    place: place.name.clone(),
                    reason: error.to_string(),
                }));
                neutral
            }
        }
    }
}

/// Rank `places` for `user` with explicitly supplied collaborators.
///
/// Builds a one-off [`RankingEngine`] over `attributes` with default
/// fallbacks and the given cutoff.
///
/// # Errors
/// Returns [`RankingError::Config`] for an unusable cutoff and the errors of
/// [`RankingEngine::rank`] otherwise.
///
/// # Examples
/// ```
/// use placerank_core::{AttributeSet, Place, UserProfile};
/// use placerank_scorer::{KeywordAttributeScorer, LexiconSentimentScorer, rank_places};
///
/// let places = [Place::new("Anywhere")];
/// let ranking = rank_places(
///     &UserProfile::new(),
///     &places,
///     &KeywordAttributeScorer::default(),
///     &LexiconSentimentScorer::default(),
///     AttributeSet::catalogue(),
///     10.0,
/// )
/// .expect("ranked");
/// assert_eq!(ranking.places.len(), 1);
/// ```
pub fn rank_places<A, S>(
    user: &UserProfile,
    places: &[Place],
    attribute_scorer: A,
    sentiment_scorer: S,
    attributes: AttributeSet,
    max_distance_km: f64,
) -> Result<Ranking, RankingError>
where
    A: AttributeScorer,
    S: SentimentScorer,
{
    let config = RankingConfig::new(attributes).with_max_distance_km(max_distance_km);
    let engine = RankingEngine::new(config, attribute_scorer, sentiment_scorer)?;
    engine.rank_within(user, places, max_distance_km)
}

fn logged(warning: RankingWarning) -> RankingWarning {
    log::warn!("{warning}");
    warning
}

#[cfg(test)]
mod tests;
