//! Algorithm comparator.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::ga::{GaConfig, GeneticOptimizer};
use crate::models::{validate_points, Point};

/// Distance of the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequentialSummary {
    /// Open-path distance of `[0, 1, ..., n-1]`, in km.
    pub distance: f64,
}

/// Distance of a candidate tour and its savings over the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    /// Open-path distance, in km.
    pub distance: f64,
    /// Sequential distance minus `distance`, in km.
    pub savings: f64,
    /// `savings` as a percentage of the sequential distance.
    pub percent: f64,
}

impl AlgorithmSummary {
    /// Summarizes `distance` against `sequential`.
    ///
    /// A zero sequential distance yields zero savings and zero percent.
    pub fn against(sequential: f64, distance: f64) -> Self {
        if sequential == 0.0 {
            return Self {
                distance,
                savings: 0.0,
                percent: 0.0,
            };
        }
        let savings = sequential - distance;
        Self {
            distance,
            savings,
            percent: savings / sequential * 100.0,
        }
    }
}

/// Distances of the three strategies over the same points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// The input order.
    pub sequential: SequentialSummary,
    /// Greedy nearest-neighbor tour from the first point.
    pub nearest_neighbor: AlgorithmSummary,
    /// Genetic algorithm result.
    pub genetic: AlgorithmSummary,
}

/// Compares sequential, nearest-neighbor and GA tours using
/// [`GaConfig::comparison`].
///
/// # Errors
/// Returns [`TourError`](crate::error::TourError) for an empty point list
/// or non-finite coordinates.
pub fn compare_algorithms(points: &[Point]) -> Result<ComparisonReport> {
    compare_algorithms_with(points, &GaConfig::comparison())
}

/// Compares sequential, nearest-neighbor and GA tours with a caller-supplied
/// GA configuration.
///
/// # Errors
/// Returns [`TourError::InvalidConfig`](crate::error::TourError::InvalidConfig)
/// if `config` fails [`GaConfig::validate`], and the input errors of
/// [`compare_algorithms`] for an empty point list or non-finite coordinates.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::ga::GaConfig;
/// use u_tour::comparison::compare_algorithms_with;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 3.0),
///     Point::new("c", 0.0, 1.0),
///     Point::new("d", 0.0, 2.0),
/// ];
/// let config = GaConfig::default().with_generations(30).with_seed(1);
/// let report = compare_algorithms_with(&points, &config).unwrap();
///
/// assert!(report.nearest_neighbor.distance < report.sequential.distance);
/// assert!(report.genetic.percent > 0.0);
/// ```
pub fn compare_algorithms_with(points: &[Point], config: &GaConfig) -> Result<ComparisonReport> {
    config.validate()?;
    validate_points(points)?;

    let distances = DistanceMatrix::from_points(points);
    let evaluator = TourEvaluator::new(&distances);
    let sequential = evaluator.sequential_distance();

    let nn_distance = evaluator.tour_distance(&nearest_neighbor_tour(&distances));
    let ga = GeneticOptimizer::new(config.clone()).optimize(points)?;

    let report = ComparisonReport {
        sequential: SequentialSummary {
            distance: sequential,
        },
        nearest_neighbor: AlgorithmSummary::against(sequential, nn_distance),
        genetic: AlgorithmSummary::against(sequential, ga.distance),
    };

    debug!(
        "comparison: sequential={:.3}km nn={:.3}km ({:.1}%) ga={:.3}km ({:.1}%)",
        report.sequential.distance,
        report.nearest_neighbor.distance,
        report.nearest_neighbor.percent,
        report.genetic.distance,
        report.genetic.percent
    );

    Ok(report)
}
