use crate::builder::FractalAnalysisBuilder;
use crate::core::Point;
use crate::error::FractalError;
use crate::estimator::{estimate_dimension, BoxCountingParams};
use crate::tests::corner_points;

use approx::assert_relative_eq;

fn corner_params() -> BoxCountingParams {
    BoxCountingParams {
        min_box_size: 0.5,
        max_box_size: Some(2.0),
        num_scales: 3,
        return_details: true,
    }
}

#[test]
fn zero_points_is_insufficient() {
    let err = estimate_dimension(&[], &BoxCountingParams::default()).unwrap_err();
    assert!(matches!(err, FractalError::InsufficientData(_)));
}

#[test]
fn one_point_is_insufficient() {
    let err = estimate_dimension(&[Point::new(1.0, 1.0)], &BoxCountingParams::default())
        .unwrap_err();
    assert!(matches!(err, FractalError::InsufficientData(_)));
}

#[test]
fn invalid_coordinates_rejected_before_geometry() {
    let pts = [Point::new(0.0, 0.0), Point::new(95.0, 0.0)];
    let err = estimate_dimension(&pts, &BoxCountingParams::default()).unwrap_err();
    assert!(matches!(err, FractalError::InvalidParameter(_)));
}

#[test]
fn invalid_scale_configuration_propagates() {
    let pts = corner_points();
    let mut params = corner_params();
    params.min_box_size = -1.0;
    assert!(matches!(
        estimate_dimension(&pts, &params),
        Err(FractalError::InvalidParameter(_))
    ));

    let mut params = corner_params();
    params.num_scales = 1;
    assert!(matches!(
        estimate_dimension(&pts, &params),
        Err(FractalError::InvalidParameter(_))
    ));
}

#[test]
fn collapsed_scale_range_is_degenerate_fit() {
    let pts = corner_points();
    let params = BoxCountingParams {
        min_box_size: 0.5,
        max_box_size: Some(0.5),
        num_scales: 3,
        return_details: false,
    };
    assert!(matches!(
        estimate_dimension(&pts, &params),
        Err(FractalError::DegenerateFit(_))
    ));
}

#[test]
fn corner_scenario_scale_series() {
    // Four unit-square corners, sizes 0.5 / 1.0 / 2.0. At size 1.0 the grid
    // is a single cell per the closed-last-cell anchoring policy, so the
    // middle count is 1; at 0.5 each corner is isolated.
    let pts = corner_points();
    let est = estimate_dimension(&pts, &corner_params()).unwrap();

    let series = est.scale_series.as_ref().expect("details requested");
    assert_eq!(series.len(), 3);
    assert_relative_eq!(series[0].box_size, 0.5, max_relative = 1e-12);
    assert_relative_eq!(series[2].box_size, 2.0, max_relative = 1e-12);
    assert_eq!(series[0].box_count, 4);
    assert_eq!(series[1].box_count, 1);
    assert_eq!(series[2].box_count, 1);

    assert_eq!(est.n_points, 4);
    assert!(est.dimension > 0.9 && est.dimension < 1.1);
    assert!(est.intercept.is_some());
}

#[test]
fn details_flag_controls_series_retention() {
    let pts = corner_points();
    let mut params = corner_params();
    params.return_details = false;
    let est = estimate_dimension(&pts, &params).unwrap();
    assert!(est.scale_series.is_none());
    assert!(est.intercept.is_none());

    params.return_details = true;
    let est = estimate_dimension(&pts, &params).unwrap();
    assert!(est.scale_series.is_some());
    assert!(est.intercept.is_some());
}

#[test]
fn scalar_summary_identical_with_and_without_details() {
    let pts = corner_points();
    let mut params = corner_params();
    params.return_details = false;
    let bare = estimate_dimension(&pts, &params).unwrap();
    params.return_details = true;
    let detailed = estimate_dimension(&pts, &params).unwrap();

    assert_eq!(bare.dimension.to_bits(), detailed.dimension.to_bits());
    assert_eq!(bare.std_error.to_bits(), detailed.std_error.to_bits());
    assert_eq!(bare.r_squared.to_bits(), detailed.r_squared.to_bits());
    assert_eq!(bare.extent, detailed.extent);
}

#[test]
fn coincident_points_estimate_to_zero_dimension() {
    // A cluster of identical epicenters occupies one box at every scale:
    // constant counts, zero slope, perfect fit.
    let pts = vec![Point::new(5.0, 5.0); 20];
    let params = BoxCountingParams {
        min_box_size: 0.1,
        max_box_size: None, // degenerate extent falls back to 1.0 degree
        num_scales: 5,
        return_details: false,
    };
    let est = estimate_dimension(&pts, &params).unwrap();
    assert_eq!(est.dimension, 0.0);
    assert_eq!(est.r_squared, 1.0);
}

#[test]
fn builder_front_end_matches_direct_call() {
    let pts = corner_points();
    let direct = estimate_dimension(&pts, &corner_params()).unwrap();
    let built = FractalAnalysisBuilder::new()
        .with_min_box_size(0.5)
        .with_max_box_size(2.0)
        .with_num_scales(3)
        .with_details(true)
        .estimate(&pts)
        .unwrap();
    assert_eq!(direct, built);
}
