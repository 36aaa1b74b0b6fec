//! Permutation crossover and mutation operators for tours.
//!
//! - [`order_crossover`] (OX): Davis (1985) — preserves relative order
//! - [`swap_mutation`]: exchange two random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::models::Tour;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[lo, hi]` from `parent_a`
/// 2. Copy the segment to the child at the same positions
/// 3. Starting right after `hi` and wrapping around, fill the remaining
///    positions with genes of `parent_b` read cyclically from `hi + 1`,
///    skipping genes already present in the child
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::models::Tour;
/// use u_tour::ga::order_crossover;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let a = Tour::new(vec![0, 1, 2, 3, 4, 5]);
/// let b = Tour::new(vec![5, 3, 1, 4, 0, 2]);
/// let child = order_crossover(&a, &b, &mut rng);
/// assert!(child.is_permutation());
/// ```
pub fn order_crossover<R: Rng>(parent_a: &Tour, parent_b: &Tour, rng: &mut R) -> Tour {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    if n < 2 {
        return parent_a.clone();
    }

    let (lo, hi) = random_segment(n, rng);
    Tour::new(ox_child(parent_a.indices(), parent_b.indices(), lo, hi))
}

/// Build one OX child: copy `template[lo..=hi]`, fill from `donor`.
fn ox_child(template: &[usize], donor: &[usize], lo: usize, hi: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in lo..=hi {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut pos = (hi + 1) % n;
    for offset in 0..n {
        let gene = donor[(hi + 1 + offset) % n];
        if !present[gene] {
            child[pos] = gene;
            present[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `rate`, exchange two distinct random
/// positions.
///
/// Returns `true` if a swap was applied. Tours with fewer than two stops are
/// never changed.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) -> bool {
    let n = tour.len();
    if n < 2 || rng.random_range(0.0..1.0) >= rate {
        return false;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    tour.indices_mut().swap(i, j);
    true
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[lo, hi]` within `0..n` where `lo <= hi`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
