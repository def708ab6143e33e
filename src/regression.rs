//! Ordinary least squares on the log-log occupancy series.
//!
//! The scale series is transformed to `x = log10(box_size)`,
//! `y = log10(box_count)` and fit with `y = slope·x + intercept`. The slope
//! is the quantity of interest (the fractal dimension is its negation); the
//! fit also reports the coefficient of determination and the standard error
//! of the slope.
//!
//! Two-point policy: with exactly 2 scale points the fit is exact and
//! `std_error` is defined as 0.0: no error can be estimated from a
//! residual-free fit, and reporting zero keeps the field total rather than
//! optional. At least 3 points are needed for a meaningful error.

use serde::Serialize;

use crate::error::FractalError;
use crate::grid::ScaleSeries;

/// Guard against division by a numerically-zero sum of squares.
const EPS: f64 = 1e-12;

/// Result of the log-log fit. Derived purely from the scale series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Standard error of the slope; 0.0 for an exact 2-point fit.
    pub std_error: f64,
    pub r_squared: f64,
}

/// Fits `log10(box_count)` against `log10(box_size)` by ordinary least
/// squares.
///
/// # Errors
///
/// - [`FractalError::InvalidParameter`] when the series has fewer than 2
///   entries, or when any entry has `box_count == 0`. A zero count cannot
///   occur for a grid anchored inside the extent, so it is surfaced as a
///   contract violation instead of being filtered silently.
/// - [`FractalError::DegenerateFit`] when all box sizes are identical (no
///   slope is determinable), or when the responses have zero variance but
///   nonzero residuals.
///
/// # Examples
///
/// ```
/// use fractalquake::grid::ScalePoint;
/// use fractalquake::regression::fit_log_log;
///
/// // Perfect D=1 scaling: count halves as size doubles.
/// let series = vec![
///     ScalePoint { box_size: 0.25, box_count: 16 },
///     ScalePoint { box_size: 0.5, box_count: 8 },
///     ScalePoint { box_size: 1.0, box_count: 4 },
///     ScalePoint { box_size: 2.0, box_count: 2 },
/// ];
/// let fit = fit_log_log(&series).unwrap();
/// assert!((fit.slope + 1.0).abs() < 1e-9);
/// assert!((fit.r_squared - 1.0).abs() < 1e-9);
/// ```
pub fn fit_log_log(series: &ScaleSeries) -> Result<Regression, FractalError> {
    if series.len() < 2 {
        return Err(FractalError::InvalidParameter(format!(
            "regression needs at least 2 scale points, got {}",
            series.len()
        )));
    }
    if let Some(sp) = series.iter().find(|sp| sp.box_count == 0) {
        return Err(FractalError::InvalidParameter(format!(
            "box_count is zero at box_size {}; occupancy counting violated its contract",
            sp.box_size
        )));
    }

    let xy: Vec<(f64, f64)> = series
        .iter()
        .map(|sp| (sp.box_size.log10(), (sp.box_count as f64).log10()))
        .collect();

    let n = xy.len() as f64;
    let mean_x = xy.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = xy.iter().map(|(_, y)| y).sum::<f64>() / n;
    let sxx: f64 = xy.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = xy.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();

    if sxx < EPS {
        return Err(FractalError::DegenerateFit(
            "all log box sizes are identical; slope is undetermined".into(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let sse: f64 = xy
        .iter()
        .map(|(x, y)| {
            let resid = y - (slope * x + intercept);
            resid * resid
        })
        .sum();
    let sst: f64 = xy.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();

    let r_squared = if sst < EPS {
        // Zero response variance: an exact constant fit is perfect; anything
        // else has no defined R².
        if sse < EPS {
            1.0
        } else {
            return Err(FractalError::DegenerateFit(
                "zero variance in log box counts with nonzero residuals".into(),
            ));
        }
    } else {
        1.0 - sse / sst
    };

    // Exactly 2 points: the line is exact and carries no estimable error.
    let std_error = if xy.len() == 2 {
        0.0
    } else {
        (sse / (n - 2.0) / sxx).sqrt()
    };

    Ok(Regression {
        slope,
        intercept,
        std_error,
        r_squared,
    })
}
