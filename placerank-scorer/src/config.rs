//! Ranking configuration and the fallback policy for missing data.

use placerank_core::{AttributeSet, BudgetLevel};

use crate::{ConfigError, NEUTRAL_SENTIMENT};

/// Default proximity cutoff in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

/// Values substituted when a record lacks the data a component needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultPolicy {
    /// Sentiment used for places without reviews and for unscored reviews.
    pub neutral_sentiment: f64,
    /// Tier assumed when the user or the place has no budget.
    pub default_budget: BudgetLevel,
    /// Proximity score used when either side has no coordinates.
    pub missing_location_proximity: f64,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self {
            neutral_sentiment: NEUTRAL_SENTIMENT,
            default_budget: BudgetLevel::default(),
            missing_location_proximity: 0.0,
        }
    }
}

/// Settings fixed for the lifetime of a [`RankingEngine`](crate::RankingEngine).
///
/// # Examples
/// ```
/// use placerank_scorer::{RankingConfig, DEFAULT_MAX_DISTANCE_KM};
///
/// let config = RankingConfig::default().with_max_distance_km(25.0);
/// assert_eq!(config.max_distance_km, 25.0);
/// assert_eq!(RankingConfig::default().max_distance_km, DEFAULT_MAX_DISTANCE_KM);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Attribute vocabulary for profiles and preferences.
    pub attributes: AttributeSet,
    /// Proximity cutoff used when a request does not override it.
    pub max_distance_km: f64,
    /// Fallbacks for missing data.
    pub defaults: DefaultPolicy,
    /// Score places on the rayon thread pool.
    pub parallel: bool,
}

impl RankingConfig {
    /// Configuration over `attributes` with default settings.
    #[must_use]
    pub fn new(attributes: AttributeSet) -> Self {
        Self {
            attributes,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            defaults: DefaultPolicy::default(),
            parallel: true,
        }
    }

    /// Configuration over the named attributes.
    ///
    /// # Errors
    /// Returns [`ConfigError::Attributes`] when the names do not form a valid
    /// attribute set.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(AttributeSet::new(names)?))
    }

    /// Override the default proximity cutoff.
    #[must_use]
    pub const fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Override the fallback policy.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: DefaultPolicy) -> Self {
        self.defaults = defaults;
        self
    }

    /// Score places one after another on the calling thread.
    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the configuration can produce meaningful scores.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for a non-positive cutoff or fallback scores
    /// outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_max_distance(self.max_distance_km)?;
        if !is_unit(self.defaults.neutral_sentiment) {
            return Err(ConfigError::NeutralSentiment(
                self.defaults.neutral_sentiment,
            ));
        }
        if !is_unit(self.defaults.missing_location_proximity) {
            return Err(ConfigError::MissingLocationProximity(
                self.defaults.missing_location_proximity,
            ));
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::new(AttributeSet::catalogue())
    }
}

pub(crate) fn validate_max_distance(max_distance_km: f64) -> Result<(), ConfigError> {
    if max_distance_km.is_finite() && max_distance_km > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::MaxDistance(max_distance_km))
    }
}

fn is_unit(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
