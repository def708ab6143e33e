//! Error taxonomy for the estimation pipeline.
//!
//! All three variants are local, deterministic, and caller-correctable: they
//! indicate an input problem, never a transient fault, so no retry policy
//! applies. The core returns them; it never logs-and-swallows and never
//! substitutes a default numeric value for a failed fit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    /// Too few points to define any dimension (n_points < 2, or an empty set
    /// where an extent was requested).
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Geometrically or statistically invalid configuration: non-positive or
    /// inverted box-size range, fewer than two scales, out-of-range
    /// coordinates, zero box counts reaching the regression.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Valid inputs that produce a regression with no defined slope, e.g. all
    /// log box sizes identical.
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),
}
