//! Log-uniform box-size generation.
//!
//! Produces the ordered sequence of box sizes tested by the grid:
//! `s[i] = min * (max/min)^(i/(n-1))`, endpoints inclusive, strictly
//! ascending when `min < max`. When `max_box_size` is not supplied it
//! defaults to the larger of the extent's spans, so the coarsest grid always
//! covers the whole point set with a single cell.

use log::debug;

use crate::error::FractalError;
use crate::extent::Extent;

/// Box-size range used when the extent itself is degenerate (all points
/// coincident) and no explicit maximum was given, in degrees.
pub const DEGENERATE_EXTENT_FALLBACK: f64 = 1.0;

/// Generates `num_scales` log-uniformly spaced box sizes.
///
/// # Arguments
///
/// - `min_box_size`: smallest box side in degrees; must be positive.
/// - `max_box_size`: largest box side in degrees; `None` resolves to
///   `extent.max_dimension()`, or [`DEGENERATE_EXTENT_FALLBACK`] when the
///   extent has zero width and height.
/// - `num_scales`: number of sizes to produce; at least 2 (a regression
///   needs two distinct abscissae).
///
/// # Errors
///
/// [`FractalError::InvalidParameter`] when `min_box_size <= 0` or not
/// finite, when `num_scales < 2`, or when the resolved maximum is smaller
/// than the minimum.
///
/// # Examples
///
/// ```
/// use fractalquake::{Extent, Point};
/// use fractalquake::scales::generate_scales;
///
/// let ext = Extent::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
/// let s = generate_scales(0.5, Some(2.0), 3, &ext).unwrap();
/// assert_eq!(s.len(), 3);
/// assert_eq!(s[0], 0.5);
/// assert_eq!(s[2], 2.0);
/// ```
pub fn generate_scales(
    min_box_size: f64,
    max_box_size: Option<f64>,
    num_scales: usize,
    extent: &Extent,
) -> Result<Vec<f64>, FractalError> {
    if !min_box_size.is_finite() || min_box_size <= 0.0 {
        return Err(FractalError::InvalidParameter(format!(
            "min_box_size must be positive, got {min_box_size}"
        )));
    }
    if num_scales < 2 {
        return Err(FractalError::InvalidParameter(format!(
            "num_scales must be at least 2, got {num_scales}"
        )));
    }

    let max = match max_box_size {
        Some(m) => {
            if !m.is_finite() {
                return Err(FractalError::InvalidParameter(format!(
                    "max_box_size must be finite, got {m}"
                )));
            }
            m
        }
        None => {
            if extent.is_degenerate() {
                debug!(
                    "degenerate extent, falling back to max_box_size={}",
                    DEGENERATE_EXTENT_FALLBACK
                );
                DEGENERATE_EXTENT_FALLBACK
            } else {
                extent.max_dimension()
            }
        }
    };
    if max < min_box_size {
        return Err(FractalError::InvalidParameter(format!(
            "max_box_size ({max}) must not be smaller than min_box_size ({min_box_size})"
        )));
    }

    // Endpoints are written exactly; intermediate sizes interpolate in log
    // space so ratios between consecutive sizes are constant.
    let n = num_scales;
    let ratio = max / min_box_size;
    let scales = (0..n)
        .map(|i| {
            if i == 0 {
                min_box_size
            } else if i == n - 1 {
                max
            } else {
                min_box_size * ratio.powf(i as f64 / (n - 1) as f64)
            }
        })
        .collect();
    Ok(scales)
}
