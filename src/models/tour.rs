//! Tour type: a visiting order over point indices.

use serde::{Deserialize, Serialize};

/// A visiting order: a permutation of point indices `0..n`.
///
/// The path is open; the last stop does not return to the first.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.indices(), &[2, 0, 1]);
/// assert!(tour.is_permutation());
/// assert_eq!(Tour::identity(3).indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a tour from an index sequence.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// The input order `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// Returns the index sequence.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns a mutable reference to the index sequence.
    pub fn indices_mut(&mut self) -> &mut [usize] {
        &mut self.indices
    }

    /// Consumes the tour and returns the index sequence.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Number of stops in this tour.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.indices.len();
        let mut seen = vec![false; n];
        for &i in &self.indices {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

impl From<Vec<usize>> for Tour {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}
