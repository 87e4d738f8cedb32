// File: crates/pixelplot-core/tests/transform.rs
// Purpose: Range mapping, linspace, and range resolution behavior.

use pixelplot_core::{auto_range, linspace, resolve_range, transform, PlotError};

const EPS: f64 = 1e-9;

#[test]
fn transform_is_identity_on_matching_ranges() {
    assert!((transform(0.0, 100.0, 0.0, 100.0, 42.0) - 42.0).abs() < EPS);
    assert!((transform(-5.0, 5.0, -5.0, 5.0, -3.5) + 3.5).abs() < EPS);
}

#[test]
fn transform_maps_endpoints_exactly() {
    assert!((transform(1.0, 5.0, 25.0, 74.0, 1.0) - 25.0).abs() < EPS);
    assert!((transform(1.0, 5.0, 25.0, 74.0, 5.0) - 74.0).abs() < EPS);
}

#[test]
fn transform_scales_linearly() {
    assert!((transform(0.0, 10.0, 0.0, 100.0, 5.0) - 50.0).abs() < EPS);
    // Inverted destination ranges flip the slope.
    assert!((transform(0.0, 10.0, 100.0, 0.0, 2.5) - 75.0).abs() < EPS);
}

#[test]
fn auto_range_pads_by_a_tenth_of_the_span() {
    let (lo, hi) = auto_range(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert!((lo - 0.6).abs() < EPS);
    assert!((hi - 5.4).abs() < EPS);
}

#[test]
fn auto_range_ignores_input_order() {
    let (lo, hi) = auto_range(&[5.0, 1.0, 3.0]).unwrap();
    assert!((lo - 0.6).abs() < EPS);
    assert!((hi - 5.4).abs() < EPS);
}

#[test]
fn auto_range_rejects_empty_data() {
    assert!(matches!(auto_range(&[]), Err(PlotError::EmptyData)));
}

#[test]
fn linspace_is_inclusive_and_even() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v.len(), 5);
    for (i, expected) in [0.0, 0.25, 0.5, 0.75, 1.0].iter().enumerate() {
        assert!((v[i] - expected).abs() < EPS);
    }
}

#[test]
fn linspace_degenerate_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(0.0, 1.0, 1), vec![1.0]);
}

#[test]
fn resolve_range_orders_explicit_bounds() {
    let (lo, hi) = resolve_range(Some([9.0, 2.0]), &[]).unwrap();
    assert!((lo - 2.0).abs() < EPS);
    assert!((hi - 9.0).abs() < EPS);
}

#[test]
fn resolve_range_falls_back_to_padded_extent() {
    let (lo, hi) = resolve_range(None, &[1.0, 5.0]).unwrap();
    assert!((lo - 0.6).abs() < EPS);
    assert!((hi - 5.4).abs() < EPS);
}

#[test]
fn resolve_range_rejects_degenerate_explicit_range() {
    assert!(matches!(
        resolve_range(Some([2.0, 2.0]), &[]),
        Err(PlotError::DegenerateRange(_))
    ));
}

#[test]
fn resolve_range_rejects_constant_data() {
    // A single value (or all-equal series) has zero span even after padding.
    assert!(matches!(
        resolve_range(None, &[3.0]),
        Err(PlotError::DegenerateRange(_))
    ));
    assert!(matches!(
        resolve_range(None, &[7.0, 7.0, 7.0]),
        Err(PlotError::DegenerateRange(_))
    ));
}
