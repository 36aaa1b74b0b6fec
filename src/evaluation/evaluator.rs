//! Tour evaluator that computes open-path distance and fitness.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Converts a tour distance into a fitness score.
///
/// `1 / (distance + 1)`: lies in `(0, 1]`, equals 1 for a zero-length tour
/// and strictly decreases as distance grows. Larger fitness is better.
///
/// # Examples
///
/// ```
/// use u_tour::evaluation::fitness;
///
/// assert_eq!(fitness(0.0), 1.0);
/// assert!(fitness(10.0) > fitness(20.0));
/// ```
pub fn fitness(distance: f64) -> f64 {
    1.0 / (distance + 1.0)
}

/// Evaluates tours against a precomputed distance matrix.
///
/// Tours are open paths: the distance is the sum of consecutive legs with
/// no return leg to the first stop.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::TourEvaluator;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 1.0),
///     Point::new("c", 0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let evaluator = TourEvaluator::new(&dm);
///
/// let straight = evaluator.tour_distance(&Tour::new(vec![0, 1, 2]));
/// let zigzag = evaluator.tour_distance(&Tour::new(vec![1, 0, 2]));
/// assert!(straight < zigzag);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given distance matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Total open-path distance of a tour, in km.
    pub fn tour_distance(&self, tour: &Tour) -> f64 {
        self.path_distance(tour.indices())
    }

    /// Total open-path distance of an index sequence, in km.
    ///
    /// Zero for sequences with fewer than two stops.
    pub fn path_distance(&self, indices: &[usize]) -> f64 {
        indices
            .windows(2)
            .map(|leg| self.distances.get(leg[0], leg[1]))
            .sum()
    }

    /// Distance of the input order `[0, 1, ..., n-1]`.
    pub fn sequential_distance(&self) -> f64 {
        self.tour_distance(&Tour::identity(self.distances.size()))
    }

    /// Fitness of a tour; see [`fitness`].
    pub fn tour_fitness(&self, tour: &Tour) -> f64 {
        fitness(self.tour_distance(tour))
    }
}
