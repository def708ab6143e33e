//! Fluent configuration front-end for the estimator and aggregator.

use log::{debug, info};

use crate::core::Point;
use crate::error::FractalError;
use crate::estimator::{estimate_dimension, BoxCountingParams, DimensionEstimate};
use crate::temporal::{estimate_yearly, YearlyParams, YearlySeries};

/// Builds box-counting analyses with validated-at-run-time parameters.
///
/// A good starting point for regional catalogs is the default configuration:
/// min_box_size 0.1°, 20 log-spaced scales, maximum box resolved from the
/// extent. Push min_box_size down only when the catalog is dense enough that
/// the finest boxes still hold multiple events, otherwise the small-scale
/// tail flattens toward n_points and drags the fit.
#[derive(Clone, Debug)]
pub struct FractalAnalysisBuilder {
    box_counting: BoxCountingParams,
    min_events_per_year: usize,
}

impl Default for FractalAnalysisBuilder {
    fn default() -> Self {
        debug!("Creating FractalAnalysisBuilder with default parameters");
        Self {
            box_counting: BoxCountingParams::default(),
            min_events_per_year: 10,
        }
    }
}

impl FractalAnalysisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest box side in degrees. Must be positive; validated at run time.
    pub fn with_min_box_size(mut self, min_box_size: f64) -> Self {
        info!("Setting min_box_size: {min_box_size}");
        self.box_counting.min_box_size = min_box_size;
        self
    }

    /// Largest box side in degrees. If not called, the larger of the
    /// extent's spans is used so the coarsest grid is a single cell.
    pub fn with_max_box_size(mut self, max_box_size: f64) -> Self {
        info!("Setting max_box_size: {max_box_size}");
        self.box_counting.max_box_size = Some(max_box_size);
        self
    }

    /// Number of log-spaced box sizes to test.
    pub fn with_num_scales(mut self, num_scales: usize) -> Self {
        info!("Setting num_scales: {num_scales}");
        self.box_counting.num_scales = num_scales;
        self
    }

    /// Retain the per-scale occupancy series and intercept in the result,
    /// for tabular inspection or export by the caller.
    pub fn with_details(mut self, return_details: bool) -> Self {
        info!("Setting return_details: {return_details}");
        self.box_counting.return_details = return_details;
        self
    }

    /// Minimum events a calendar year needs before it is estimated in
    /// [`estimate_yearly`](Self::estimate_yearly).
    pub fn with_min_events_per_year(mut self, min_events: usize) -> Self {
        info!("Setting min_events_per_year: {min_events}");
        self.min_events_per_year = min_events;
        self
    }

    /// Current box-counting parameters, e.g. for cache keying.
    pub fn params(&self) -> &BoxCountingParams {
        &self.box_counting
    }

    /// Runs the dimension estimator on `points` with this configuration.
    pub fn estimate(&self, points: &[Point]) -> Result<DimensionEstimate, FractalError> {
        debug!(
            "Running estimate over {} points with {:?}",
            points.len(),
            self.box_counting
        );
        estimate_dimension(points, &self.box_counting)
    }

    /// Runs the per-year aggregation on timestamped `points`.
    pub fn estimate_yearly(&self, points: &[Point]) -> Result<YearlySeries, FractalError> {
        let params = YearlyParams {
            min_events_per_partition: self.min_events_per_year,
            box_counting: self.box_counting.clone(),
        };
        debug!(
            "Running yearly aggregation over {} points with {:?}",
            points.len(),
            params
        );
        estimate_yearly(points, &params)
    }
}
