//! # u-tour
//!
//! Stop sequencing for a single vehicle run: given geographic stops, find a
//! visiting order that minimizes the open-path travel distance and report
//! how much it saves over the input order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, OptimizationResult)
//! - [`distance`] — Haversine distance and dense distance matrix
//! - [`evaluation`] — Tour distance and fitness
//! - [`constructive`] — Nearest-neighbor baseline heuristic
//! - [`ga`] — Genetic algorithm (tournament selection, OX, swap mutation, elitism)
//! - [`comparison`] — Sequential vs nearest-neighbor vs GA report
//! - [`error`] — Input and configuration errors
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Point;
//! use u_tour::ga::{GaConfig, GeneticOptimizer};
//!
//! let stops = vec![
//!     Point::new("depot", -23.55, -46.63),
//!     Point::new("a", -23.60, -46.70),
//!     Point::new("b", -23.56, -46.64),
//!     Point::new("c", -23.58, -46.67),
//! ];
//! let result = GeneticOptimizer::new(GaConfig::default().with_seed(3))
//!     .optimize(&stops)
//!     .unwrap();
//! assert_eq!(result.tour.len(), 4);
//! assert!(result.savings >= 0.0);
//! ```

pub mod comparison;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;

pub use error::{Result, TourError};
