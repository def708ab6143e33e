//! Temporal Aggregator: per-year dimension estimates.
//!
//! Partitions a timestamped point set by UTC calendar year and runs the
//! dimension estimator on each partition with one shared set of box-counting
//! parameters. Years with too few events are reported as explicit
//! "insufficient data" entries rather than omitted, so callers can render
//! gaps instead of silently skipping them; per-year estimator failures
//! (e.g. a year of coincident epicenters) are downgraded to the same marker
//! instead of aborting the whole batch.
//!
//! Per-year computations share no state and are executed in parallel with
//! rayon; the final series is sorted ascending by year regardless of the
//! completion order of the parallel tasks.

use std::collections::HashMap;

use chrono::Datelike;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::core::Point;
use crate::error::FractalError;
use crate::estimator::{estimate_dimension, BoxCountingParams, DimensionEstimate};

/// Aggregation configuration. The same box-counting parameters are applied
/// to every partition.
#[derive(Clone, Debug, PartialEq)]
pub struct YearlyParams {
    /// Minimum number of events a year must have to be estimated.
    pub min_events_per_partition: usize,
    /// Box-counting configuration shared by every partition.
    pub box_counting: BoxCountingParams,
}

impl Default for YearlyParams {
    fn default() -> Self {
        Self {
            min_events_per_partition: 10,
            box_counting: BoxCountingParams::default(),
        }
    }
}

/// Outcome of one yearly partition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum YearOutcome {
    /// The partition had enough events and the fit succeeded.
    Estimate(DimensionEstimate),
    /// Below the event threshold, or the estimator failed for this year.
    InsufficientData,
}

/// One year of the series, always present for every year seen in the input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YearlyEstimate {
    pub year: i32,
    /// Event count of the partition, reported even when no estimate was made.
    pub n_events: usize,
    pub outcome: YearOutcome,
}

impl YearlyEstimate {
    /// The estimate, when one was computed.
    pub fn estimate(&self) -> Option<&DimensionEstimate> {
        match &self.outcome {
            YearOutcome::Estimate(e) => Some(e),
            YearOutcome::InsufficientData => None,
        }
    }
}

/// Year-ordered series of per-partition outcomes.
pub type YearlySeries = Vec<YearlyEstimate>;

/// Estimates the fractal dimension of `points` per UTC calendar year.
///
/// # Errors
///
/// [`FractalError::InvalidParameter`] when any point lacks a timestamp:
/// collaborators are required to filter malformed rows before calling, so a
/// missing timestamp is surfaced as a caller bug rather than skipped.
///
/// Per-partition estimator errors do **not** propagate; they become
/// [`YearOutcome::InsufficientData`] entries.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fractalquake::{estimate_yearly, Point, YearOutcome, YearlyParams};
///
/// // Two sparse years: both below the default threshold of 10 events.
/// let points: Vec<Point> = (0..6)
///     .map(|i| {
///         let t = Utc.with_ymd_and_hms(2020 + (i % 2), 1, 1, 0, 0, 0).unwrap();
///         Point::with_timestamp(i as f64, i as f64, t)
///     })
///     .collect();
///
/// let series = estimate_yearly(&points, &YearlyParams::default()).unwrap();
/// assert_eq!(series.len(), 2);
/// assert!(series.iter().all(|y| y.outcome == YearOutcome::InsufficientData));
/// ```
pub fn estimate_yearly(
    points: &[Point],
    params: &YearlyParams,
) -> Result<YearlySeries, FractalError> {
    let mut partitions: HashMap<i32, Vec<Point>> = HashMap::new();
    for (i, p) in points.iter().enumerate() {
        let ts = p.timestamp.ok_or_else(|| {
            FractalError::InvalidParameter(format!(
                "point {i} has no timestamp; yearly aggregation requires timestamped events"
            ))
        })?;
        partitions.entry(ts.year()).or_default().push(*p);
    }

    info!(
        "Yearly aggregation over {} events in {} partitions (threshold {})",
        points.len(),
        partitions.len(),
        params.min_events_per_partition
    );

    let mut series: YearlySeries = partitions
        .into_par_iter()
        .map(|(year, year_points)| {
            let n_events = year_points.len();
            if n_events < params.min_events_per_partition {
                return YearlyEstimate {
                    year,
                    n_events,
                    outcome: YearOutcome::InsufficientData,
                };
            }
            let outcome = match estimate_dimension(&year_points, &params.box_counting) {
                Ok(est) => YearOutcome::Estimate(est),
                Err(e) => {
                    debug!("year {year}: estimate failed ({e}), recording as insufficient data");
                    YearOutcome::InsufficientData
                }
            };
            YearlyEstimate {
                year,
                n_events,
                outcome,
            }
        })
        .collect();

    series.sort_by_key(|y| y.year);
    Ok(series)
}
