mod test_estimator;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::Point;

pub const SEED: u64 = 42;

/// Coordinates are quantized to multiples of 1/2048 so additions of integer
/// offsets stay exact in f64 and translation tests can compare bits.
pub const QUANTUM: f64 = 1.0 / 2048.0;

/// Uniform points on a horizontal unit segment (lat fixed, lon in [0,1)).
pub fn line_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lon = rng.random_range(0..2048) as f64 * QUANTUM;
            Point::new(0.0, lon)
        })
        .collect()
}

/// Uniform points over the unit square.
pub fn square_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lat = rng.random_range(0..2048) as f64 * QUANTUM;
            let lon = rng.random_range(0..2048) as f64 * QUANTUM;
            Point::new(lat, lon)
        })
        .collect()
}

/// The four unit-square corners from the anchoring-policy scenario.
pub fn corner_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
    ]
}
