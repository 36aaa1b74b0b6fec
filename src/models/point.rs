//! Stop point type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine;
use crate::error::{Result, TourError};

/// A geographic stop to be visited.
///
/// Coordinates are in degrees. Identity is by `id`; the optimizer itself
/// only works with positions in the input slice.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let depot = Point::new("depot", -23.5505, -46.6333);
/// assert_eq!(depot.id(), "depot");
/// assert_eq!(depot.lat(), -23.5505);
/// assert!(depot.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: String,
    lat: f64,
    lng: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }

    /// Point identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Returns `true` if both points sit at exactly the same coordinates.
    pub fn same_location(&self, other: &Point) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine(self, other)
    }
}

/// Rejects an empty point list or any point with a non-finite coordinate.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(TourError::EmptyInput);
    }
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(TourError::NonFiniteCoordinate {
            index,
            id: p.id.clone(),
        });
    }
    Ok(())
}

/// Returns `true` if there is at most one distinct location in `points`.
pub fn all_coincident(points: &[Point]) -> bool {
    match points.split_first() {
        Some((first, rest)) => rest.iter().all(|p| p.same_location(first)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new("a", 10.0, 20.0);
        assert_eq!(p.id(), "a");
        assert_eq!(p.lat(), 10.0);
        assert_eq!(p.lng(), 20.0);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new("a", -23.55, -46.63);
        let b = Point::new("b", -22.90, -43.17);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_points(&[]), Err(TourError::EmptyInput));
    }

    #[test]
    fn test_validate_non_finite() {
        let points = vec![
            Point::new("ok", 0.0, 0.0),
            Point::new("bad", f64::NAN, 0.0),
            Point::new("worse", 0.0, f64::INFINITY),
        ];
        assert_eq!(
            validate_points(&points),
            Err(TourError::NonFiniteCoordinate {
                index: 1,
                id: "bad".into()
            })
        );
    }

    #[test]
    fn test_validate_ok() {
        let points = vec![Point::new("a", 0.0, 0.0), Point::new("b", 1.0, 1.0)];
        assert!(validate_points(&points).is_ok());
    }

    #[test]
    fn test_all_coincident() {
        assert!(all_coincident(&[]));
        assert!(all_coincident(&[Point::new("a", 1.0, 2.0)]));
        assert!(all_coincident(&[
            Point::new("a", 1.0, 2.0),
            Point::new("b", 1.0, 2.0),
        ]));
        assert!(!all_coincident(&[
            Point::new("a", 1.0, 2.0),
            Point::new("b", 1.0, 2.5),
        ]));
    }

    #[test]
    fn test_point_json_shape() {
        let p: Point =
            serde_json::from_str(r#"{"id":"s1","lat":-23.5,"lng":-46.6}"#).expect("valid json");
        assert_eq!(p, Point::new("s1", -23.5, -46.6));
        let back = serde_json::to_value(&p).expect("serializable");
        assert_eq!(back["lng"], -46.6);
    }
}
