//! Criterion benchmarks for u-tour.
//!
//! Uses synthetic stop sets scattered around a city center to measure the
//! GA loop, the crossover operator and the nearest-neighbor baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tour::constructive::nearest_neighbor;
use u_tour::ga::{order_crossover, random_tour, GaConfig, GeneticOptimizer};
use u_tour::models::Point;

fn city_stops(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Point::new(
                format!("stop-{i}"),
                -23.55 + rng.random_range(-0.2..0.2),
                -46.63 + rng.random_range(-0.2..0.2),
            )
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_optimize");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 50usize, 100usize), (30, 100, 100), (80, 100, 50)] {
        let points = city_stops(n, 42);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_p{pop}_g{gen}"), n),
            &(points, config),
            |b, (p, c)| {
                let optimizer = GeneticOptimizer::new(c.clone());
                b.iter(|| black_box(optimizer.optimize(black_box(p))))
            },
        );
    }
    group.finish();
}

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[50usize, 500, 5000] {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_tour(n, &mut rng);
        let b_parent = random_tour(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b_parent), |b, (p1, p2)| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");

    for &n in &[50usize, 200, 1000] {
        let points = city_stops(n, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, p| {
            b.iter(|| black_box(nearest_neighbor(black_box(p))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga, bench_order_crossover, bench_nearest_neighbor);
criterion_main!(benches);
