//! Price-tier compatibility scoring.

use placerank_core::BudgetLevel;

/// Score price-tier compatibility: `1.0` for equal tiers, falling by a third
/// per tier of difference to `0.0` at the widest gap.
///
/// # Examples
/// ```
/// use placerank_core::BudgetLevel;
/// use placerank_scorer::budget_score;
///
/// assert_eq!(budget_score(BudgetLevel::MIN, BudgetLevel::MIN), 1.0);
/// assert_eq!(budget_score(BudgetLevel::MIN, BudgetLevel::MAX), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "budget compatibility is a linear scale over tier distance"
)]
pub fn budget_score(user: BudgetLevel, place: BudgetLevel) -> f64 {
    let span = f64::from(BudgetLevel::MAX.get());
    1.0 - f64::from(user.distance(place)) / span
}
