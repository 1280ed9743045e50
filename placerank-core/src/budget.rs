//! Coarse price tiers shared by users and places.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a budget level falls outside `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("budget level {level} is outside the supported range 0..=3")]
pub struct BudgetLevelError {
    /// The rejected level.
    pub level: i64,
}

/// Price tier from `0` (cheapest) to `3` (most expensive).
///
/// # Examples
/// ```
/// use placerank_core::BudgetLevel;
///
/// let level = BudgetLevel::try_from(2_i64).expect("valid level");
/// assert_eq!(level.get(), 2);
/// assert!(BudgetLevel::try_from(4_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct BudgetLevel(u8);

impl BudgetLevel {
    /// Highest supported tier.
    pub const MAX: Self = Self(3);
    /// Lowest supported tier.
    pub const MIN: Self = Self(0);

    /// Return the tier as an integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Absolute number of tiers separating `self` and `other`.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl Default for BudgetLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for BudgetLevel {
    type Error = BudgetLevelError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        u8::try_from(level)
            .ok()
            .filter(|value| *value <= Self::MAX.0)
            .map(Self)
            .ok_or(BudgetLevelError { level })
    }
}

impl From<BudgetLevel> for u8 {
    fn from(level: BudgetLevel) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(3)]
    fn accepts_supported_levels(#[case] raw: i64) {
        assert!(BudgetLevel::try_from(raw).is_ok());
    }

    #[rstest]
    #[case(-1)]
    #[case(4)]
    #[case(300)]
    fn rejects_out_of_range_levels(#[case] raw: i64) {
        let err = BudgetLevel::try_from(raw).expect_err("out of range");
        assert_eq!(err.level, raw);
    }

    #[rstest]
    fn distance_is_symmetric() {
        assert_eq!(BudgetLevel::MIN.distance(BudgetLevel::MAX), 3);
        assert_eq!(BudgetLevel::MAX.distance(BudgetLevel::MIN), 3);
    }

    #[rstest]
    fn deserialises_from_integer() {
        let level: BudgetLevel = serde_json::from_str("2").expect("decode level");
        assert_eq!(level.get(), 2);
        assert!(serde_json::from_str::<BudgetLevel>("7").is_err());
    }
}
