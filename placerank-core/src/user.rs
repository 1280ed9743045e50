//! The person places are ranked for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BudgetLevel, GeoPoint};

/// Errors returned by [`UserProfile::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserProfileError {
    /// A preference weight was NaN or infinite.
    #[error("preference weight for '{attribute}' must be finite, got {weight}")]
    NonFiniteWeight {
        /// Attribute carrying the bad weight.
        attribute: String,
        /// The rejected weight.
        weight: f64,
    },
}

/// Preference weights, budget, and position of a user.
///
/// Weights are relative importances keyed by attribute name. They need not
/// sum to one; scoring normalises them.
///
/// # Examples
/// ```
/// use placerank_core::{BudgetLevel, UserProfile};
///
/// let user = UserProfile::new()
///     .with_preference("Lively", 0.6)
///     .with_preference("Trendy", 0.4)
///     .with_budget(BudgetLevel::try_from(2_i64).expect("valid level"));
/// assert_eq!(user.preference("Lively"), Some(0.6));
/// assert!(user.preference("Quiet").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Relative weight per attribute name.
    #[serde(default)]
    pub preferences: BTreeMap<String, f64>,
    /// Preferred price tier, when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetLevel>,
    /// Current position, when given.
    #[serde(
        default,
        rename = "coords",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<GeoPoint>,
}

impl UserProfile {
    /// Construct a profile with no preferences, budget, or location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the raw weight for `attribute`, if present.
    #[must_use]
    pub fn preference(&self, attribute: &str) -> Option<f64> {
        self.preferences.get(attribute).copied()
    }

    /// Insert or update a preference weight.
    pub fn set_preference(&mut self, attribute: impl Into<String>, weight: f64) {
        self.preferences.insert(attribute.into(), weight);
    }

    /// Add a preference weight while returning `self` for chaining.
    #[must_use]
    pub fn with_preference(mut self, attribute: impl Into<String>, weight: f64) -> Self {
        self.set_preference(attribute, weight);
        self
    }

    /// Set the price tier while returning `self` for chaining.
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

    /// Reject weights scoring cannot use.
    ///
    /// # Errors
    /// Returns [`UserProfileError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn validate(&self) -> Result<(), UserProfileError> {
        match self
            .preferences
            .iter()
            .find(|(_, weight)| !weight.is_finite())
        {
            Some((attribute, weight)) => Err(UserProfileError::NonFiniteWeight {
                attribute: attribute.clone(),
                weight: *weight,
            }),
            None => Ok(()),
        }
    }
}
