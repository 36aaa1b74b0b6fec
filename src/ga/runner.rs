//! GA evolutionary loop execution.
//!
//! [`GeneticOptimizer`] orchestrates one optimization run:
//! validation → initialization → evaluation → elitism → selection →
//! crossover → mutation → repeat.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::initial_population;
use super::selection::tournament_select;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::models::{all_coincident, validate_points, OptimizationResult, Point, Tour};

/// Genetic algorithm that orders stops to minimize open-path distance.
///
/// Every call to [`optimize`](Self::optimize) owns its population and RNG;
/// nothing is shared between runs.
///
/// # Usage
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::ga::{GaConfig, GeneticOptimizer};
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 0.0, 2.0),
///     Point::new("c", 0.0, 1.0),
///     Point::new("d", 0.0, 3.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_elitism(3)
///     .with_seed(42);
///
/// let result = GeneticOptimizer::new(config).optimize(&points).unwrap();
/// assert!(result.tour.is_permutation());
/// assert!(result.savings > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticOptimizer {
    config: GaConfig,
}

impl GeneticOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the optimization with an RNG seeded from [`GaConfig::seed`].
    ///
    /// # Errors
    /// Returns [`TourError`](crate::error::TourError) if the configuration is
    /// invalid, `points` is empty, or any coordinate is non-finite.
    pub fn optimize(&self, points: &[Point]) -> Result<OptimizationResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.optimize_with_rng(points, &mut rng)
    }

    /// Runs the optimization drawing all randomness from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<OptimizationResult> {
        self.config.validate()?;
        validate_points(points)?;

        let n = points.len();
        if n <= 1 || all_coincident(points) {
            debug!("degenerate input ({n} points), skipping generation loop");
            return Ok(OptimizationResult::trivial(n));
        }

        let config = &self.config;
        let distances = DistanceMatrix::from_points(points);
        let evaluator = TourEvaluator::new(&distances);
        let sequential = evaluator.sequential_distance();

        debug!(
            "ga start: points={n} population={} generations={} elitism={} sequential={sequential:.3}km",
            config.population_size, config.generations, config.elitism
        );

        // 1. Initialize and evaluate
        let tours = initial_population(config.population_size, n, rng);
        let mut population = evaluate_population(&evaluator, tours, config.parallel);
        sort_by_fitness(&mut population);

        // 2. Track best-ever
        let mut best = population[0].clone();
        let mut distance_history = history_buffer(config.generations);
        distance_history.push(best.distance());

        // 3. Evolutionary loop
        for gen in 0..config.generations {
            population = next_generation(&population, &evaluator, config, rng);

            if population[0].fitness() > best.fitness() {
                best = population[0].clone();
                trace!("generation {}: best distance {:.3}km", gen + 1, best.distance());
            }
            distance_history.push(best.distance());
        }

        let distance = best.distance();
        debug!(
            "ga done: distance={distance:.3}km savings={:.3}km",
            sequential - distance
        );

        Ok(OptimizationResult {
            tour: best.into_tour(),
            distance,
            savings: sequential - distance,
            generations_run: config.generations,
            distance_history,
        })
    }
}

/// Upper bound on the history slots reserved before the loop starts.
const HISTORY_RESERVE_LIMIT: usize = 4096;

/// Empty history buffer sized for the run, capped at [`HISTORY_RESERVE_LIMIT`].
fn history_buffer(generations: usize) -> Vec<f64> {
    Vec::with_capacity(generations.saturating_add(1).min(HISTORY_RESERVE_LIMIT))
}

/// Breeds one generation from a population sorted fittest first.
///
/// The top `config.elitism` chromosomes are cloned unchanged; the rest are
/// tournament → OX → swap offspring. The result is sorted fittest first.
fn next_generation<R: Rng>(
    population: &[Chromosome],
    evaluator: &TourEvaluator<'_>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    let offspring_count = config.population_size - config.elitism;
    let mut offspring: Vec<Tour> = Vec::with_capacity(offspring_count);
    while offspring.len() < offspring_count {
        let p1 = tournament_select(population, config.tournament_size, rng);
        let p2 = tournament_select(population, config.tournament_size, rng);
        let mut child = order_crossover(population[p1].tour(), population[p2].tour(), rng);
        swap_mutation(&mut child, config.mutation_rate, rng);
        offspring.push(child);
    }

    let mut next_gen: Vec<Chromosome> = population[..config.elitism].to_vec();
    next_gen.extend(evaluate_population(evaluator, offspring, config.parallel));
    sort_by_fitness(&mut next_gen);
    next_gen
}

/// Sorts fittest first. Stable: equal-fitness tours keep their order.
fn sort_by_fitness(population: &mut [Chromosome]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}

/// Evaluate a batch of tours in order.
#[cfg(feature = "parallel")]
fn evaluate_population(
    evaluator: &TourEvaluator<'_>,
    tours: Vec<Tour>,
    parallel: bool,
) -> Vec<Chromosome> {
    use rayon::prelude::*;

    if parallel {
        tours
            .into_par_iter()
            .map(|tour| Chromosome::evaluate(tour, evaluator))
            .collect()
    } else {
        tours
            .into_iter()
            .map(|tour| Chromosome::evaluate(tour, evaluator))
            .collect()
    }
}

/// Evaluate a batch of tours in order.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    evaluator: &TourEvaluator<'_>,
    tours: Vec<Tour>,
    _parallel: bool,
) -> Vec<Chromosome> {
    tours
        .into_iter()
        .map(|tour| Chromosome::evaluate(tour, evaluator))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
