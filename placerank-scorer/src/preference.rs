//! Project a user's preference weights onto a place's attribute profile.

use std::collections::BTreeMap;

use placerank_core::{AttributeProfile, AttributeSet, unit_interval};

/// Score how well `profile` matches the user's `preferences`.
///
/// Weights are normalised by their raw sum before use, so `{A: 2, B: 2}`
/// behaves like `{A: 0.5, B: 0.5}`. When the sum is not positive (no
/// preferences, or all zero or negative) the score is `0.0`. Preferences for
/// attributes outside `attributes` never contribute but do take part in the
/// normalising sum.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use placerank_core::{AttributeProfile, AttributeScores, AttributeSet};
/// use placerank_scorer::preference_score;
///
/// let attributes = AttributeSet::new(["A", "B"]).expect("valid set");
/// let values = AttributeScores::from([("A".into(), 0.8), ("B".into(), 0.2)]);
/// let profile = AttributeProfile::from_values(&attributes, &values);
/// let preferences = BTreeMap::from([("A".to_owned(), 1.0)]);
///
/// let score = preference_score(&preferences, &profile, &attributes);
/// assert!((score - 0.8).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "preference matching is a normalised dot product"
)]
pub fn preference_score(
    preferences: &BTreeMap<String, f64>,
    profile: &AttributeProfile,
    attributes: &AttributeSet,
) -> f64 {
    let total: f64 = preferences.values().sum();
    if !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    let score: f64 = attributes
        .iter()
        .map(|name| {
            let weight = preferences.get(name).copied().unwrap_or(0.0) / total;
            weight * profile.get(name).unwrap_or(0.0)
        })
        .sum();
    unit_interval(score)
}
