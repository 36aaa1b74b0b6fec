//! Great-circle distance on a spherical Earth.

use crate::models::Point;

/// Mean Earth radius used by [`haversine`], in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Non-negative and symmetric; zero when both points share coordinates.
/// Coordinates must be finite (see [`validate_points`](crate::models::validate_points)).
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::haversine;
///
/// let a = Point::new("a", 0.0, 0.0);
/// let b = Point::new("b", 0.0, 1.0);
/// // one degree of longitude on the equator
/// assert!((haversine(&a, &b) - 111.195).abs() < 1e-3);
/// ```
pub fn haversine(a: &Point, b: &Point) -> f64 {
    if a.same_location(b) {
        return 0.0;
    }
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlng = (b.lng() - a.lng()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // clamp guards sqrt(1 - h) against rounding past 1.0 for antipodal points
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_KM * c
}
