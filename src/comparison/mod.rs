//! Side-by-side comparison of the sequential order, the nearest-neighbor
//! heuristic and the genetic algorithm.

mod comparator;

pub use comparator::{
    compare_algorithms, compare_algorithms_with, AlgorithmSummary, ComparisonReport,
    SequentialSummary,
};
