//! Constructive heuristics for building tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from the first stop, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_tour};
