//! Dimension Estimator: composes extent, scales, grid, and regression into a
//! single estimate.
//!
//! `estimate_dimension` is a pure function of the point set and parameters:
//! no I/O, no shared state, bit-identical output for identical input. The
//! fractal dimension is the negated slope of the log-log fit: the rate of
//! decay of occupied-box count with box size.

use log::{debug, info, trace};
use serde::Serialize;

use crate::core::Point;
use crate::error::FractalError;
use crate::extent::{validate_coordinates, Extent};
use crate::grid::{compute_scale_series, ScaleSeries};
use crate::regression::fit_log_log;
use crate::scales::generate_scales;

/// Box-counting configuration, passed explicitly per call.
///
/// Defaults mirror the canonical analysis setup: 0.1° minimum box,
/// maximum resolved from the extent, 20 scales, no per-scale detail.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxCountingParams {
    /// Smallest box side in degrees; must be positive.
    pub min_box_size: f64,
    /// Largest box side in degrees; `None` uses the larger extent span.
    pub max_box_size: Option<f64>,
    /// Number of log-spaced box sizes to test; at least 2.
    pub num_scales: usize,
    /// When set, the estimate retains the full scale series and intercept
    /// for tabular inspection; when unset only the scalar summary is
    /// populated, skipping the allocation for high-frequency batch calls.
    pub return_details: bool,
}

impl Default for BoxCountingParams {
    fn default() -> Self {
        Self {
            min_box_size: 0.1,
            max_box_size: None,
            num_scales: 20,
            return_details: false,
        }
    }
}

/// The value returned to callers. Never mutated after construction;
/// serialization to CSV/JSON/display is entirely the collaborator's job.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionEstimate {
    /// Box-counting fractal dimension, `-slope` of the log-log fit.
    pub dimension: f64,
    /// Standard error of the dimension (equal to that of the slope).
    pub std_error: f64,
    /// Goodness of fit of the log-log regression.
    pub r_squared: f64,
    /// Number of events analyzed.
    pub n_points: usize,
    /// Geographic extent of the analyzed set.
    pub extent: Extent,
    /// Per-scale occupancy, present only with `return_details`.
    pub scale_series: Option<ScaleSeries>,
    /// Regression intercept, present only with `return_details`.
    pub intercept: Option<f64>,
}

/// Estimates the box-counting fractal dimension of `points`.
///
/// Pipeline: validate coordinates → extent → log-spaced scales → occupancy
/// series → log-log OLS → `dimension = -slope`.
///
/// # Errors
///
/// - [`FractalError::InsufficientData`] when `points.len() < 2`: a fractal
///   dimension is undefined for 0 or 1 points. Checked before any geometry.
/// - [`FractalError::InvalidParameter`] for out-of-range coordinates or an
///   invalid scale configuration.
/// - [`FractalError::DegenerateFit`] when the scale configuration collapses
///   to a single abscissa (e.g. `min_box_size == max_box_size`).
///
/// # Examples
///
/// ```
/// use fractalquake::{estimate_dimension, BoxCountingParams, Point};
///
/// let pts = [Point::new(0.0, 0.0), Point::new(0.0, 1.0),
///            Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
/// let params = BoxCountingParams {
///     min_box_size: 0.5,
///     max_box_size: Some(2.0),
///     num_scales: 3,
///     return_details: true,
/// };
/// let est = estimate_dimension(&pts, &params).unwrap();
/// assert_eq!(est.n_points, 4);
/// assert!(est.dimension > 0.0);
/// ```
pub fn estimate_dimension(
    points: &[Point],
    params: &BoxCountingParams,
) -> Result<DimensionEstimate, FractalError> {
    if points.len() < 2 {
        return Err(FractalError::InsufficientData(format!(
            "fractal dimension is undefined for {} point(s)",
            points.len()
        )));
    }
    validate_coordinates(points)?;

    info!(
        "Estimating dimension for {} points (min_box={}, max_box={:?}, scales={})",
        points.len(),
        params.min_box_size,
        params.max_box_size,
        params.num_scales
    );

    let extent = Extent::from_points(points)?;
    trace!(
        "Extent: lat [{}, {}], lon [{}, {}]",
        extent.min_lat,
        extent.max_lat,
        extent.min_lon,
        extent.max_lon
    );

    let box_sizes = generate_scales(
        params.min_box_size,
        params.max_box_size,
        params.num_scales,
        &extent,
    )?;
    let series = compute_scale_series(points, &extent, &box_sizes);
    let fit = fit_log_log(&series)?;

    debug!(
        "Fit complete: D={:.4}, std_error={:.4}, r_squared={:.4}",
        -fit.slope, fit.std_error, fit.r_squared
    );

    let (scale_series, intercept) = if params.return_details {
        (Some(series), Some(fit.intercept))
    } else {
        (None, None)
    };

    Ok(DimensionEstimate {
        dimension: -fit.slope,
        std_error: fit.std_error,
        r_squared: fit.r_squared,
        n_points: points.len(),
        extent,
        scale_series,
        intercept,
    })
}
