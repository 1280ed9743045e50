//! Aggregate per-review attribute similarity into one profile per place.

use std::collections::BTreeMap;

use placerank_core::{
    AttributeProfile, AttributeScorer, AttributeScores, AttributeSet, CollaboratorError, Review,
    unit_interval,
};

/// A review the attribute scorer could not handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFailure {
    /// Position of the review within the place's review list.
    pub review_index: usize,
    /// Error reported by the scorer.
    pub error: CollaboratorError,
}

/// Average the attribute scores of a place's reviews.
///
/// Reviews with blank or absent text are skipped and do not count towards
/// the average. When no review is usable the profile is all zeros.
/// Reviews the scorer fails on are skipped the same way; use
/// [`build_attribute_profile_reporting`] to observe them.
///
/// # Examples
/// ```
/// use placerank_core::{AttributeSet, Review, test_support::FixedAttributeScorer};
/// use placerank_scorer::build_attribute_profile;
///
/// let attributes = AttributeSet::new(["Cozy", "Lively"]).expect("valid set");
/// let scorer = FixedAttributeScorer::new()
///     .with_review("snug", [("Cozy", 0.9), ("Lively", 0.1)])
///     .with_review("warm", [("Cozy", 0.7), ("Lively", 0.3)]);
/// let reviews = [Review::new("snug"), Review::new("  "), Review::new("warm")];
///
/// let profile = build_attribute_profile(&reviews, &scorer, &attributes);
/// assert!((profile.get("Cozy").unwrap_or_default() - 0.8).abs() < 1e-9);
/// ```
#[must_use]
pub fn build_attribute_profile<A>(
    reviews: &[Review],
    scorer: &A,
    attributes: &AttributeSet,
) -> AttributeProfile
where
    A: AttributeScorer + ?Sized,
{
    build_attribute_profile_reporting(reviews, scorer, attributes).0
}

/// Variant of [`build_attribute_profile`] that also returns the reviews the
/// scorer failed on.
#[must_use]
pub fn build_attribute_profile_reporting<A>(
    reviews: &[Review],
    scorer: &A,
    attributes: &AttributeSet,
) -> (AttributeProfile, Vec<ReviewFailure>)
where
    A: AttributeScorer + ?Sized,
{
    let mut sums: BTreeMap<&str, f64> = attributes.iter().map(|name| (name, 0.0)).collect();
    let mut included = 0_usize;
    let mut failures = Vec::new();

    for (review_index, text) in reviews
        .iter()
        .enumerate()
        .filter_map(|(index, review)| review.content().map(|text| (index, text)))
    {
        match scorer.score_review(text) {
            Ok(scores) => {
                accumulate(&mut sums, &scores);
                included += 1;
            }
            Err(error) => failures.push(ReviewFailure {
                review_index,
                error,
            }),
        }
    }

    if included == 0 {
        return (AttributeProfile::zeros(attributes), failures);
    }
    (
        AttributeProfile::from_values(attributes, &average(sums, included)),
        failures,
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "profile aggregation sums similarity values"
)]
fn accumulate(sums: &mut BTreeMap<&str, f64>, scores: &AttributeScores) {
    for (name, total) in sums.iter_mut() {
        if let Some(value) = scores.get(*name) {
            *total += unit_interval(*value);
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging divides sums by the number of usable reviews"
)]
fn average(sums: BTreeMap<&str, f64>, included: usize) -> AttributeScores {
    let count = included as f64;
    sums.into_iter()
        .map(|(name, total)| (name.to_owned(), total / count))
        .collect()
}
