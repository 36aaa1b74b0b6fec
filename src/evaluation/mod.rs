//! Tour distance and fitness evaluation.

mod evaluator;

pub use evaluator::{fitness, TourEvaluator};
