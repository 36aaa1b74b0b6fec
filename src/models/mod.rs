//! Domain model types for stop sequencing.
//!
//! Points carry geographic coordinates, tours are permutations over point
//! indices, and results bundle a tour with its distance and savings.

mod point;
mod solution;
mod tour;

pub use point::{all_coincident, validate_points, Point};
pub use solution::OptimizationResult;
pub use tour::Tour;
