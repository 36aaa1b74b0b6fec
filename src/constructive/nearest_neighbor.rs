//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the first stop, always step to the
//! nearest unvisited stop.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal, but it is fast and deterministic, which
//! makes it a good comparison baseline.

use crate::distance::DistanceMatrix;
use crate::models::{Point, Tour};

/// Builds a nearest-neighbor tour over a distance matrix.
///
/// Starts at index 0. Ties go to the lowest index. An empty matrix gives an
/// empty tour.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 3.0),
///     Point::new("c", 0.0, 1.0),
///     Point::new("d", 0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = nearest_neighbor_tour(&dm);
/// assert_eq!(tour.indices(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix) -> Tour {
    let n = distances.size();
    if n == 0 {
        return Tour::new(Vec::new());
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while let Some(next) =
        distances.nearest_neighbor(current, (0..n).filter(|&i| !visited[i]))
    {
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Tour::new(order)
}

/// Builds a nearest-neighbor tour directly from points.
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    nearest_neighbor_tour(&DistanceMatrix::from_points(points))
}
