//! Fixed-weight combination of the four component scores.

use placerank_core::{ScoreBreakdown, unit_interval};

/// Relative weighting of the four components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinerWeights {
    /// Weight of aggregated review sentiment.
    pub sentiment: f64,
    /// Weight of the preference match.
    pub preference: f64,
    /// Weight of proximity.
    pub proximity: f64,
    /// Weight of budget compatibility.
    pub budget: f64,
}

/// The weights every ranking uses. They sum to `1.0`.
pub const WEIGHTS: CombinerWeights = CombinerWeights {
    sentiment: 0.25,
    preference: 0.30,
    proximity: 0.30,
    budget: 0.15,
};

impl CombinerWeights {
    /// Sum of all weights.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "weights are summed")]
    pub fn sum(&self) -> f64 {
        self.sentiment + self.preference + self.proximity + self.budget
    }
}

/// Unrounded component scores for one place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    /// Aggregated review sentiment.
    pub sentiment: f64,
    /// Preference match.
    pub preference: f64,
    /// Proximity to the user.
    pub proximity: f64,
    /// Budget compatibility.
    pub budget: f64,
}

impl ComponentScores {
    /// Combine the components into a rounded breakdown.
    ///
    /// Components are clamped into `0.0..=1.0`, the final score is computed
    /// from the unrounded components, and all five values are then rounded
    /// to four decimal places.
    ///
    /// # Examples
    /// ```
    /// use placerank_scorer::ComponentScores;
    ///
    /// let breakdown = ComponentScores {
    ///     sentiment: 0.5,
    ///     preference: 0.8,
    ///     proximity: 1.0,
    ///     budget: 1.0,
    /// }
    /// .combine();
    /// assert_eq!(breakdown.final_score, 0.815);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is a weighted sum"
    )]
    pub fn combine(self) -> ScoreBreakdown {
        let sentiment = unit_interval(self.sentiment);
        let preference = unit_interval(self.preference);
        let proximity = unit_interval(self.proximity);
        let budget = unit_interval(self.budget);
        let final_score = sentiment * WEIGHTS.sentiment
            + preference * WEIGHTS.preference
            + proximity * WEIGHTS.proximity
            + budget * WEIGHTS.budget;
        ScoreBreakdown {
            final_score: round4(unit_interval(final_score)),
            sentiment_score: round4(sentiment),
            preference_score: round4(preference),
            proximity_score: round4(proximity),
            budget_score: round4(budget),
        }
    }
}

/// Round to four decimal places.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "rounding scales by 10^4")]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn weights_sum_to_one() {
        assert!((WEIGHTS.sum() - 1.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.123_44, 0.1234)]
    #[case(0.123_46, 0.1235)]
    #[case(1.0, 1.0)]
    #[case(0.0, 0.0)]
    fn rounds_to_four_places(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(round4(raw), expected);
    }

    #[rstest]
    fn rounds_only_at_output() {
        let breakdown = ComponentScores {
            sentiment: 1.0 / 3.0,
            preference: 1.0 / 3.0,
            proximity: 1.0 / 3.0,
            budget: 1.0 / 3.0,
        }
        .combine();
        assert_eq!(breakdown.sentiment_score, 0.3333);
        assert_eq!(breakdown.final_score, 0.3333);
    }

    #[rstest]
    fn budget_only_place() {
        let breakdown = ComponentScores {
            sentiment: 0.5,
            preference: 0.0,
            proximity: 0.0,
            budget: 1.0,
        }
        .combine();
        assert_eq!(breakdown.final_score, 0.275);
        assert_eq!(breakdown.proximity_score, 0.0);
    }

    #[rstest]
    fn clamps_components_into_unit_interval() {
        let breakdown = ComponentScores {
            sentiment: 1.5,
            preference: -0.2,
            proximity: f64::NAN,
            budget: 1.0,
        }
        .combine();
        assert_eq!(breakdown.sentiment_score, 1.0);
        assert_eq!(breakdown.preference_score, 0.0);
        assert_eq!(breakdown.proximity_score, 0.0);
        assert_eq!(breakdown.final_score, 0.4);
    }
}
