//! Distance-based proximity scoring.

use geo::{Distance, HaversineMeasure};
use placerank_core::GeoPoint;

/// Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
///
/// # Examples
/// ```
/// use placerank_core::GeoPoint;
/// use placerank_scorer::haversine_km;
///
/// let origin = GeoPoint::new(0.0, 0.0).expect("valid point");
/// let east = GeoPoint::new(0.0, 1.0).expect("valid point");
/// assert!((haversine_km(origin, east) - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM).distance(from.point(), to.point())
}

/// Linear proximity score from `1.0` at the user's position to `0.0` at
/// `max_distance_km`, and exactly `0.0` beyond it.
///
/// A non-positive or non-finite `max_distance_km` scores `0.0`.
#[must_use]
pub fn proximity_score(user: GeoPoint, place: GeoPoint, max_distance_km: f64) -> f64 {
    decay(haversine_km(user, place), max_distance_km)
}

#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays linearly with distance"
)]
fn decay(distance_km: f64, max_distance_km: f64) -> f64 {
    if !max_distance_km.is_finite() || max_distance_km <= 0.0 || distance_km > max_distance_km {
        return 0.0;
    }
    (1.0 - distance_km / max_distance_km).clamp(0.0, 1.0)
}
