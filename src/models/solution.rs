//! Optimization result type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// Outcome of a tour optimization run.
///
/// `savings` is measured against the input order (the sequential tour), in
/// kilometers. It is negative when the best tour found is longer than the
/// input order, which can happen on very small generation budgets.
///
/// # Examples
///
/// ```
/// use u_tour::models::OptimizationResult;
///
/// let result = OptimizationResult::trivial(1);
/// assert_eq!(result.tour.indices(), &[0]);
/// assert_eq!(result.distance, 0.0);
/// assert_eq!(result.generations_run, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Best visiting order found.
    pub tour: Tour,
    /// Total open-path distance of `tour`, in km.
    pub distance: f64,
    /// Sequential distance minus `distance`, in km.
    pub savings: f64,
    /// Number of generations executed.
    pub generations_run: usize,
    /// Best-ever distance after initialization and after each generation.
    pub distance_history: Vec<f64>,
}

impl OptimizationResult {
    /// Zero-distance identity result for degenerate inputs.
    pub fn trivial(n: usize) -> Self {
        Self {
            tour: Tour::identity(n),
            distance: 0.0,
            savings: 0.0,
            generations_run: 0,
            distance_history: Vec::new(),
        }
    }
}
