//! Evaluated tour chromosome.

use crate::evaluation::{fitness, TourEvaluator};
use crate::models::Tour;

/// A tour together with its distance and fitness.
///
/// Chromosomes are built already evaluated and never change afterwards;
/// each generation produces fresh values and elites are cloned forward.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::TourEvaluator;
/// use u_tour::ga::Chromosome;
///
/// let points = vec![Point::new("a", 0.0, 0.0), Point::new("b", 0.0, 1.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// let c = Chromosome::evaluate(Tour::new(vec![1, 0]), &TourEvaluator::new(&dm));
/// assert!(c.distance() > 0.0);
/// assert!(c.fitness() < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    tour: Tour,
    distance: f64,
    fitness: f64,
}

impl Chromosome {
    /// Evaluates a tour and wraps it.
    pub fn evaluate(tour: Tour, evaluator: &TourEvaluator<'_>) -> Self {
        let distance = evaluator.tour_distance(&tour);
        Self {
            tour,
            distance,
            fitness: fitness(distance),
        }
    }

    /// The visiting order.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Open-path distance of the tour, in km.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Fitness of the tour; higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Consumes the chromosome and returns its tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Point;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new("a", 0.0, 0.0),
            Point::new("b", 0.0, 1.0),
            Point::new("c", 0.0, 2.0),
        ])
    }

    #[test]
    fn test_evaluate_sets_distance_and_fitness() {
        let dm = matrix();
        let ev = TourEvaluator::new(&dm);
        let c = Chromosome::evaluate(Tour::new(vec![0, 1, 2]), &ev);
        assert_eq!(c.distance(), ev.tour_distance(c.tour()));
        assert_eq!(c.fitness(), fitness(c.distance()));
    }

    #[test]
    fn test_shorter_tour_is_fitter() {
        let dm = matrix();
        let ev = TourEvaluator::new(&dm);
        let straight = Chromosome::evaluate(Tour::new(vec![0, 1, 2]), &ev);
        let zigzag = Chromosome::evaluate(Tour::new(vec![1, 0, 2]), &ev);
        assert!(straight.fitness() > zigzag.fitness());
    }

    #[test]
    fn test_clone_is_independent() {
        let dm = matrix();
        let ev = TourEvaluator::new(&dm);
        let original = Chromosome::evaluate(Tour::new(vec![2, 1, 0]), &ev);
        let mut tour = original.clone().into_tour();
        tour.indices_mut().swap(0, 1);
        assert_eq!(original.tour().indices(), &[2, 1, 0]);
    }
}
