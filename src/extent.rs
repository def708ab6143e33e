//! Bounding extent of a point set.
//!
//! The extent is the axis-aligned geographic rectangle covering every point,
//! computed fresh per call and never cached. A single point or a set of
//! coincident points yields a zero-width and/or zero-height extent; that is
//! legal here and handled downstream by the scale generator.

use serde::Serialize;

use crate::core::Point;
use crate::error::FractalError;

/// Axis-aligned bounding rectangle of a point set, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Extent {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Extent {
    /// Computes the bounding extent of `points`.
    ///
    /// # Errors
    ///
    /// [`FractalError::InsufficientData`] when `points` is empty: no extent
    /// is defined for zero points.
    ///
    /// # Examples
    ///
    /// ```
    /// use fractalquake::{Extent, Point};
    ///
    /// let pts = [Point::new(1.0, 10.0), Point::new(3.0, 14.0)];
    /// let ext = Extent::from_points(&pts).unwrap();
    /// assert_eq!(ext.height(), 2.0);
    /// assert_eq!(ext.width(), 4.0);
    /// ```
    pub fn from_points(points: &[Point]) -> Result<Self, FractalError> {
        let first = points.first().ok_or_else(|| {
            FractalError::InsufficientData("cannot compute extent of an empty point set".into())
        })?;

        let mut ext = Extent {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for p in &points[1..] {
            ext.min_lat = ext.min_lat.min(p.lat);
            ext.max_lat = ext.max_lat.max(p.lat);
            ext.min_lon = ext.min_lon.min(p.lon);
            ext.max_lon = ext.max_lon.max(p.lon);
        }
        Ok(ext)
    }

    /// Longitude span in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Latitude span in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// The larger of the two spans; zero for a single or coincident points.
    #[inline]
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// True when every point coincides (both spans are zero).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }
}

/// Rejects coordinates the grid cannot place: non-finite values and
/// out-of-range latitudes/longitudes.
///
/// The estimator runs this before any geometry; collaborators parsing raw
/// catalogs are expected to have filtered malformed rows already, so a
/// failure here is a caller bug surfaced loudly rather than skipped.
pub fn validate_coordinates(points: &[Point]) -> Result<(), FractalError> {
    for (i, p) in points.iter().enumerate() {
        if !p.is_valid() {
            return Err(FractalError::InvalidParameter(format!(
                "point {} has invalid coordinates (lat={}, lon={})",
                i, p.lat, p.lon
            )));
        }
    }
    Ok(())
}
