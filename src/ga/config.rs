//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::DEFAULT_TOURNAMENT_SIZE;
use crate::error::{Result, TourError};

/// Configuration for the tour-optimizing genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.elitism, 10);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_mutation_rate(0.05)
///     .with_elitism(20)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of tours in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. Must be at least 1.
    pub generations: usize,

    /// Probability that an offspring receives a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of fittest tours copied unchanged into the next generation.
    ///
    /// May equal `population_size`, in which case no offspring are bred and
    /// the population is carried forward as is.
    pub elitism: usize,

    /// Number of tours sampled per tournament.
    ///
    /// Higher values increase selection pressure.
    pub tournament_size: usize,

    /// Whether to evaluate each generation in parallel.
    ///
    /// Only has an effect when the `parallel` feature is enabled. Evaluation
    /// is pure, so results do not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.02,
            elitism: 10,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Larger budget used when comparing the GA against the baselines.
    ///
    /// - Population: 150, Generations: 1000
    pub fn comparison() -> Self {
        Self {
            population_size: 150,
            generations: 1000,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TourError::invalid_config(
                "population_size must be at least 2",
            ));
        }
        if self.generations == 0 {
            return Err(TourError::invalid_config("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TourError::invalid_config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elitism > self.population_size {
            return Err(TourError::invalid_config(format!(
                "elitism ({}) exceeds population_size ({})",
                self.elitism, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(TourError::invalid_config(
                "tournament_size must be at least 1",
            ));
        }
        Ok(())
    }
}
