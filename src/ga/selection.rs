//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::chromosome::Chromosome;

/// Default number of contestants per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Tournament selection: sample `k` chromosomes with replacement and
/// return the index of the fittest.
///
/// Higher `k` means stronger selection pressure. `k = 0` is treated as 1.
/// Ties keep the contestant drawn first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_select<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::TourEvaluator;
    use crate::models::{Point, Tour};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Four chromosomes on a line; index 0 is the straight (shortest) tour.
    fn make_population() -> Vec<Chromosome> {
        let dm = DistanceMatrix::from_points(&[
            Point::new("a", 0.0, 0.0),
            Point::new("b", 0.0, 1.0),
            Point::new("c", 0.0, 2.0),
            Point::new("d", 0.0, 3.0),
        ]);
        let ev = TourEvaluator::new(&dm);
        [
            vec![0, 1, 2, 3],
            vec![0, 2, 1, 3],
            vec![3, 0, 2, 1],
            vec![1, 3, 0, 2],
        ]
        .into_iter()
        .map(|t| Chromosome::evaluate(Tour::new(t), &ev))
        .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament_select(&pop, 4, &mut rng)] += 1;
        }
        // P(best in 4 draws with replacement) = 1 - (3/4)^4 ≈ 0.68
        assert!(
            counts[0] > 6000,
            "expected best to win >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament_select(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_zero_size_treated_as_one() {
        let pop = make_population();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(tournament_select(&pop, 0, &mut rng) < pop.len());
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population()[..1].to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(tournament_select(&pop, DEFAULT_TOURNAMENT_SIZE, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Chromosome> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        tournament_select(&pop, 3, &mut rng);
    }
}
