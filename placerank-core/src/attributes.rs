//! Predefined descriptive attributes and per-place attribute profiles.
//!
//! An [`AttributeSet`] is the fixed, ordered vocabulary shared by user
//! preferences and place profiles. An [`AttributeProfile`] always carries
//! exactly one value per attribute in the set it was built from.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute catalogue shipped with the engine.
pub const CATALOGUE: [&str; 26] = [
    "Cozy",
    "Trendy",
    "Romantic",
    "Lively",
    "Quiet",
    "Elegant",
    "Casual",
    "Artistic",
    "Bohemian",
    "Family-Friendly",
    "Pet-Friendly",
    "Outdoor Seating",
    "Good for Groups",
    "Good for Solo",
    "Gourmet",
    "Comfort Food",
    "Healthy",
    "Vegan-Friendly",
    "Dessert",
    "Coffee",
    "Date",
    "Scenic View",
    "Parking Available",
    "Wheelchair Accessible",
    "Wi-Fi Available",
    "Workspace",
];

/// Errors returned by [`AttributeSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeSetError {
    /// No attribute names were supplied.
    #[error("attribute set must contain at least one attribute")]
    Empty,
    /// An attribute name was empty or whitespace.
    #[error("attribute at position {position} has a blank name")]
    BlankName {
        /// Zero-based position in the supplied list.
        position: usize,
    },
    /// The same attribute name appeared twice.
    #[error("attribute '{name}' appears more than once")]
    Duplicate {
        /// The repeated name.
        name: String,
    },
}

/// Ordered, duplicate-free set of attribute names.
///
/// # Examples
/// ```
/// use placerank_core::AttributeSet;
///
/// # fn main() -> Result<(), placerank_core::AttributeSetError> {
/// let attributes = AttributeSet::new(["Cozy", "Quiet"])?;
/// assert_eq!(attributes.len(), 2);
/// assert!(attributes.contains("Quiet"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    names: Vec<String>,
}

impl AttributeSet {
    /// Validate and construct an attribute set, preserving input order.
    ///
    /// # Errors
    /// Returns [`AttributeSetError`] when the list is empty, contains a blank
    /// name, or repeats a name.
    pub fn new<I, S>(candidates: I) -> Result<Self, AttributeSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AttributeSetError::Empty);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(AttributeSetError::BlankName { position });
            }
            if !seen.insert(name.as_str()) {
                return Err(AttributeSetError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// The built-in attribute catalogue.
    #[must_use]
    pub fn catalogue() -> Self {
        Self {
            names: CATALOGUE.iter().map(|&name| name.to_owned()).collect(),
        }
    }

    /// Iterate over attribute names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Report whether `name` belongs to the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a validated set; provided for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::new(names).map_err(serde::de::Error::custom)
    }
}

/// Raw per-attribute similarity values as produced by an attribute scorer.
pub type AttributeScores = BTreeMap<String, f64>;

/// Averaged attribute similarity for one place.
///
/// Values lie in `0.0..=1.0`; every attribute of the originating set is
/// present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeProfile {
    values: BTreeMap<String, f64>,
}

impl AttributeProfile {
    /// A profile mapping every attribute in `attributes` to `0.0`.
    #[must_use]
    pub fn zeros(attributes: &AttributeSet) -> Self {
        Self {
            values: attributes.iter().map(|name| (name.to_owned(), 0.0)).collect(),
        }
    }

    /// Build a profile over `attributes`, taking values from `values` and
    /// defaulting absent attributes to `0.0`. Names outside the set are
    /// dropped and values are clamped into `0.0..=1.0`.
    #[must_use]
    pub fn from_values(attributes: &AttributeSet, values: &AttributeScores) -> Self {
        Self {
            values: attributes
                .iter()
                .map(|name| {
                    let value = values.get(name).copied().map_or(0.0, crate::unit_interval);
                    (name.to_owned(), value)
                })
                .collect(),
        }
    }

    /// Value for `attribute`, if the profile covers it.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.values.get(attribute).copied()
    }

    /// Iterate over `(attribute, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of attributes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Report whether the profile covers no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
