//! WGS84 positions for users and places.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoPointError {
    /// Latitude was non-finite or outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    /// Longitude was non-finite or outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}

/// A latitude/longitude pair in decimal degrees.
///
/// Serialised as a `[latitude, longitude]` array.
///
/// # Examples
/// ```
/// use placerank_core::GeoPoint;
///
/// let cairo = GeoPoint::new(30.0444, 31.2357).expect("valid point");
/// assert_eq!(cairo.point().x(), 31.2357);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Validate and construct a point.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either coordinate is non-finite or out
    /// of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The position as a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn point(&self) -> Point<f64> {
        Point(Coord {
            x: self.longitude,
            y: self.latitude,
        })
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = GeoPointError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.latitude, point.longitude)
    }
}
