//! Average per-review sentiment into one value per place.

use placerank_core::{AnnotatedReview, unit_interval};

/// Polarity assumed when nothing is known.
pub const NEUTRAL_SENTIMENT: f64 = 0.5;

/// Mean sentiment of `reviews`, treating unscored reviews as neutral.
///
/// An empty list scores [`NEUTRAL_SENTIMENT`].
///
/// # Examples
/// ```
/// use placerank_core::{AnnotatedReview, Review};
/// use placerank_scorer::sentiment_score;
///
/// let reviews = [
///     AnnotatedReview::new(Review::new("loved it"), 1.0),
///     AnnotatedReview::new(Review::new("hated it"), 0.0),
/// ];
/// assert_eq!(sentiment_score(&reviews), 0.5);
/// assert_eq!(sentiment_score(&[]), 0.5);
/// ```
#[must_use]
pub fn sentiment_score(reviews: &[AnnotatedReview]) -> f64 {
    sentiment_score_with(reviews, NEUTRAL_SENTIMENT)
}

/// [`sentiment_score`] with an explicit neutral value.
///
/// Non-finite scores count as neutral; others are clamped into
/// `0.0..=1.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "sentiment aggregation is an arithmetic mean"
)]
pub fn sentiment_score_with(reviews: &[AnnotatedReview], neutral: f64) -> f64 {
    if reviews.is_empty() {
        return neutral;
    }
    let total: f64 = reviews
        .iter()
        .map(|review| {
            review
                .sentiment_score
                .filter(|score| score.is_finite())
                .map_or(neutral, unit_interval)
        })
        .sum();
    total / reviews.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use placerank_core::Review;
    use rstest::rstest;

    fn scored(score: Option<f64>) -> AnnotatedReview {
        AnnotatedReview {
            review: Review::new("text"),
            sentiment_score: score,
        }
    }

    #[rstest]
    #[case::single_positive(vec![Some(1.0)], 1.0)]
    #[case::mixed(vec![Some(1.0), Some(0.0)], 0.5)]
    #[case::missing_is_neutral(vec![Some(1.0), None], 0.75)]
    #[case::nan_is_neutral(vec![Some(f64::NAN), Some(0.0)], 0.25)]
    #[case::clamped(vec![Some(2.0), Some(-1.0)], 0.5)]
    fn averages_scores(#[case] scores: Vec<Option<f64>>, #[case] expected: f64) {
        let reviews: Vec<AnnotatedReview> = scores.into_iter().map(scored).collect();
        let score = sentiment_score(&reviews);
        assert!((score - expected).abs() < 1e-12, "got {score}");
    }

    #[rstest]
    fn empty_uses_configured_neutral() {
        assert_eq!(sentiment_score_with(&[], 0.6), 0.6);
        assert_eq!(sentiment_score(&[]), NEUTRAL_SENTIMENT);
    }
}
