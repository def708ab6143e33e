use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use std::hint::black_box;
use std::time::Duration;

use fractalquake::estimator::{estimate_dimension, BoxCountingParams};
use fractalquake::extent::Extent;
use fractalquake::grid::count_occupied_boxes;
use fractalquake::Point;

/// Synthetic epicenter catalog: a diffuse cloud around a fault-like diagonal.
fn generate_catalog(n_points: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_points)
        .map(|_| {
            let along: f64 = rng.random_range(0.0..8.0);
            let across: f64 = rng.random_range(-0.3..0.3);
            Point::new(26.0 + along * 0.5 + across, 84.0 + along)
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    // Group 1: single-scale occupancy counting, the per-scale inner loop.
    let mut group_grid = c.benchmark_group("count_occupied_boxes");
    group_grid.warm_up_time(Duration::from_millis(500));
    group_grid.measurement_time(Duration::from_secs(3));
    group_grid.sample_size(30);

    for &n in &[1_000, 10_000, 100_000] {
        let points = generate_catalog(n, 7);
        let extent = Extent::from_points(&points).unwrap();
        group_grid.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| count_occupied_boxes(black_box(&points), black_box(&extent), 0.05));
        });
    }
    group_grid.finish();

    // Group 2: the full estimate, scaling over the number of tested scales.
    let mut group_est = c.benchmark_group("estimate_dimension");
    group_est.warm_up_time(Duration::from_millis(500));
    group_est.measurement_time(Duration::from_secs(5));
    group_est.sample_size(20);

    let points = generate_catalog(20_000, 11);
    for &num_scales in &[10, 20, 40] {
        let params = BoxCountingParams {
            min_box_size: 0.02,
            max_box_size: None,
            num_scales,
            return_details: false,
        };
        group_est.bench_with_input(
            BenchmarkId::from_parameter(num_scales),
            &num_scales,
            |b, _| {
                b.iter(|| estimate_dimension(black_box(&points), black_box(&params)).unwrap());
            },
        );
    }
    group_est.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
