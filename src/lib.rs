//! fractalquake: box-counting fractal dimension for seismic point sets.
//!
//! This crate estimates the fractal (Minkowski–Bouligand) dimension of a set
//! of geographic point events (earthquake epicenters) and can track how the
//! estimate evolves per calendar year. The pipeline is a strict chain:
//!
//! - [`extent`]: bounding extent of the point set;
//! - [`scales`]: log-uniformly spaced box sizes over a configurable range;
//! - [`grid`]: occupied-cell counts per box size (the dominant cost);
//! - [`regression`]: ordinary least squares on the log-log occupancy series;
//! - [`estimator`]: composes the above into a [`DimensionEstimate`];
//! - [`temporal`]: repeats the estimator per year, in parallel via rayon.
//!
//! Design goals:
//! - Pure, synchronous computation: every estimate is a function of its input
//!   point set and parameters only, with no hidden state between calls.
//! - Explicit errors: callers receive [`FractalError`] values; the numeric
//!   kernel never logs-and-swallows and never substitutes defaults for a
//!   failed fit.
//! - Deterministic behavior across runs for reproducible results.
//!
//! # Examples
//!
//! Estimate the dimension of a small epicenter cloud:
//!
//! ```
//! use fractalquake::{FractalAnalysisBuilder, Point};
//!
//! let points: Vec<Point> = (0..100)
//!     .map(|i| Point::new(27.0 + (i as f64) * 0.01, 85.0 + (i as f64) * 0.01))
//!     .collect();
//!
//! let estimate = FractalAnalysisBuilder::new()
//!     .with_min_box_size(0.01)
//!     .with_num_scales(10)
//!     .estimate(&points)
//!     .unwrap();
//!
//! // Points on a line: dimension near 1.
//! assert!(estimate.dimension > 0.5 && estimate.dimension < 1.5);
//! ```

pub mod builder;
pub mod cache;
pub mod core;
pub mod error;
pub mod estimator;
pub mod extent;
pub mod grid;
pub mod regression;
pub mod scales;
pub mod temporal;

#[cfg(test)]
mod tests;

pub use crate::builder::FractalAnalysisBuilder;
pub use crate::core::Point;
pub use crate::error::FractalError;
pub use crate::estimator::{estimate_dimension, BoxCountingParams, DimensionEstimate};
pub use crate::extent::Extent;
pub use crate::temporal::{
    estimate_yearly, YearOutcome, YearlyEstimate, YearlyParams, YearlySeries,
};
