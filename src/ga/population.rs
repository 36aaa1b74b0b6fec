//! Random population initialization.

use rand::Rng;

use crate::models::Tour;

/// Creates a uniformly random permutation of `0..n`.
///
/// Fisher–Yates shuffle: every permutation is equally likely.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    Tour::new(perm)
}

/// Creates `size` independent random tours over `0..n`.
///
/// Duplicates across the population are allowed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::ga::initial_population;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let population = initial_population(20, 8, &mut rng);
/// assert_eq!(population.len(), 20);
/// assert!(population.iter().all(|t| t.len() == 8 && t.is_permutation()));
/// ```
pub fn initial_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Vec<Tour> {
    (0..size).map(|_| random_tour(n, rng)).collect()
}
