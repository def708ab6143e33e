//! Point: the value vocabulary shared by the whole pipeline.
//!
//! A [`Point`] is an immutable (latitude, longitude) pair in degrees,
//! optionally carrying a UTC timestamp and a magnitude. The geometric kernel
//! consumes only the coordinates; timestamp and magnitude exist for the
//! temporal aggregator and for external collaborators (export, display).
//!
//! Point sets are plain slices owned by the caller. The pipeline never
//! mutates them, insertion order is irrelevant, and duplicates are legal
//! (they collapse inside a grid cell).
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fractalquake::Point;
//!
//! let p = Point::new(27.7, 85.3);
//! assert_eq!(p.lat, 27.7);
//!
//! let t = Utc.with_ymd_and_hms(2015, 4, 25, 6, 11, 25).unwrap();
//! let q = Point::with_timestamp(27.7, 85.3, t).with_magnitude(7.8);
//! assert_eq!(q.magnitude, Some(7.8));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single geographic event. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
    /// Event time, if known. Consumed only by the temporal aggregator.
    pub timestamp: Option<DateTime<Utc>>,
    /// Event magnitude, if known. Not consumed by the geometric kernel.
    pub magnitude: Option<f64>,
}

impl Point {
    /// A bare epicenter with no timestamp or magnitude.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            timestamp: None,
            magnitude: None,
        }
    }

    /// An epicenter with an event time, as required by
    /// [`estimate_yearly`](crate::temporal::estimate_yearly).
    #[inline]
    pub fn with_timestamp(lat: f64, lon: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            lat,
            lon,
            timestamp: Some(timestamp),
            magnitude: None,
        }
    }

    /// Attach a magnitude, keeping everything else.
    #[inline]
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// True when both coordinates are finite and within geographic range
    /// (|lat| ≤ 90, |lon| ≤ 180).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= 90.0
            && self.lon.abs() <= 180.0
    }
}
