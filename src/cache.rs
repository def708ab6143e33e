//! Collaborator-layer memoization of dimension estimates.
//!
//! The estimator itself is stateless and never consults a cache; dashboards
//! that re-render the same dataset repeatedly own one of these instead.
//! Entries are keyed by a fingerprint of the point coordinates (bit-exact,
//! via `f64::to_bits`) together with the parameter tuple, so two calls hit
//! the same entry only when the estimator would return bit-identical output
//! anyway.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use log::{debug, trace};

use crate::core::Point;
use crate::error::FractalError;
use crate::estimator::{estimate_dimension, BoxCountingParams, DimensionEstimate};

/// Explicit estimate cache owned by the caller. Not shared, not persistent.
#[derive(Debug, Default)]
pub struct EstimateCache {
    entries: HashMap<u64, DimensionEstimate>,
    hits: usize,
    misses: usize,
}

impl EstimateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached estimate for (`points`, `params`), computing and
    /// storing it on a miss. Errors are returned, never cached: a failed
    /// fit is recomputed on the next call with corrected inputs.
    pub fn get_or_compute(
        &mut self,
        points: &[Point],
        params: &BoxCountingParams,
    ) -> Result<DimensionEstimate, FractalError> {
        let key = fingerprint(points, params);
        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            trace!("cache hit for key {key:#x}");
            return Ok(cached.clone());
        }
        self.misses += 1;
        debug!("cache miss for key {key:#x}, computing");
        let estimate = estimate_dimension(points, params)?;
        self.entries.insert(key, estimate.clone());
        Ok(estimate)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry, keeping counters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn fingerprint(points: &[Point], params: &BoxCountingParams) -> u64 {
    let mut h = DefaultHasher::new();
    points.len().hash(&mut h);
    for p in points {
        p.lat.to_bits().hash(&mut h);
        p.lon.to_bits().hash(&mut h);
    }
    params.min_box_size.to_bits().hash(&mut h);
    match params.max_box_size {
        Some(m) => {
            1u8.hash(&mut h);
            m.to_bits().hash(&mut h);
        }
        None => 0u8.hash(&mut h),
    }
    params.num_scales.hash(&mut h);
    params.return_details.hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]
    }

    fn params() -> BoxCountingParams {
        BoxCountingParams {
            min_box_size: 0.5,
            max_box_size: Some(2.0),
            num_scales: 3,
            return_details: false,
        }
    }

    #[test]
    fn second_call_hits() {
        let pts = square_points();
        let mut cache = EstimateCache::new();
        let first = cache.get_or_compute(&pts, &params()).unwrap();
        let second = cache.get_or_compute(&pts, &params()).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn parameter_change_misses() {
        let pts = square_points();
        let mut cache = EstimateCache::new();
        cache.get_or_compute(&pts, &params()).unwrap();
        let mut other = params();
        other.num_scales = 4;
        cache.get_or_compute(&pts, &other).unwrap();
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn point_change_misses() {
        let mut pts = square_points();
        let mut cache = EstimateCache::new();
        cache.get_or_compute(&pts, &params()).unwrap();
        pts.push(Point::new(0.5, 0.5));
        cache.get_or_compute(&pts, &params()).unwrap();
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut cache = EstimateCache::new();
        let one = [Point::new(0.0, 0.0)];
        assert!(cache.get_or_compute(&one, &params()).is_err());
        assert!(cache.is_empty());
    }
}
