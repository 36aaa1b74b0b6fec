//! Error types for tour optimization.

use thiserror::Error as ThisError;

/// Input or configuration rejected before optimization starts.
///
/// Degenerate but valid inputs (a single point, all points at the same
/// location) are not errors; they produce a trivial zero-distance result.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TourError {
    /// The point list is empty.
    #[error("invalid input: point list is empty")]
    EmptyInput,

    /// A point has a NaN or infinite latitude/longitude.
    #[error("invalid input: point {index} ({id}) has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input list.
        index: usize,
        /// Identifier of the offending point.
        id: String,
    },

    /// A GA parameter is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    /// Builds an [`InvalidConfig`](Self::InvalidConfig) error from a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
