//! Box-counting grid: occupied-cell counts per box size.
//!
//! For a given box size `s`, the extent is partitioned into a uniform grid
//! anchored at its minimum corner; a point lands in cell
//! `(floor((lat - min_lat)/s), floor((lon - min_lon)/s))`, with indices
//! clamped into the grid so points on the extent's maximum edge fall in the
//! last cell (every cell is half-open, the last one closed, i.e. histogram
//! binning). The count is the number of distinct occupied cells: a set, not
//! a sum, so repeated points in one cell count once.
//!
//! The clamped anchoring gives the guarantee the regression relies on:
//! `box_size >= extent.max_dimension()` makes the grid a single cell, so the
//! count is exactly 1; as `box_size → 0⁺` the count approaches the number of
//! distinct points, bounded above by `n_points`.
//!
//! This is the dominant cost of the estimator: O(n_points) per scale,
//! O(n_points · num_scales) for a full series.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::Point;
use crate::extent::Extent;

/// One entry of the occupancy series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScalePoint {
    /// Box side length in degrees.
    pub box_size: f64,
    /// Number of distinct occupied grid cells at this size.
    pub box_count: usize,
}

/// Occupancy series ordered by ascending box size.
pub type ScaleSeries = Vec<ScalePoint>;

/// Cells along one axis for a span and box size; a degenerate axis still has
/// one cell.
#[inline]
fn cells_along(span: f64, box_size: f64) -> i64 {
    ((span / box_size).ceil() as i64).max(1)
}

#[inline]
fn cell_index(offset: f64, box_size: f64, n_cells: i64) -> i64 {
    ((offset / box_size).floor() as i64).clamp(0, n_cells - 1)
}

/// Counts distinct occupied cells of a grid with side `box_size` anchored at
/// the extent's minimum corner.
///
/// # Examples
///
/// ```
/// use fractalquake::{Extent, Point};
/// use fractalquake::grid::count_occupied_boxes;
///
/// let pts = [Point::new(0.0, 0.0), Point::new(0.0, 1.0),
///            Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
/// let ext = Extent::from_points(&pts).unwrap();
/// assert_eq!(count_occupied_boxes(&pts, &ext, 0.5), 4);
/// assert_eq!(count_occupied_boxes(&pts, &ext, 1.0), 1);
/// ```
pub fn count_occupied_boxes(points: &[Point], extent: &Extent, box_size: f64) -> usize {
    let lat_cells = cells_along(extent.height(), box_size);
    let lon_cells = cells_along(extent.width(), box_size);

    let cells: HashSet<(i64, i64)> = points
        .iter()
        .map(|p| {
            (
                cell_index(p.lat - extent.min_lat, box_size, lat_cells),
                cell_index(p.lon - extent.min_lon, box_size, lon_cells),
            )
        })
        .collect();
    cells.len()
}

/// Runs the counter once per box size, preserving the generator's order.
///
/// With log-spaced ascending sizes over a fixed point set the counts come
/// out non-increasing; that monotonicity is asserted by the test suite, not
/// enforced here; the series reports what the grid actually measured.
pub fn compute_scale_series(points: &[Point], extent: &Extent, box_sizes: &[f64]) -> ScaleSeries {
    box_sizes
        .iter()
        .map(|&s| ScalePoint {
            box_size: s,
            box_count: count_occupied_boxes(points, extent, s),
        })
        .collect()
}
