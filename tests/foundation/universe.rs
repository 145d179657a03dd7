//! Integration tests for universe discretization.

use brazier::foundation::{Error, Universe};

#[test]
fn reference_universes_have_expected_grids() {
    let outer = Universe::new(0.0, 40.0, 1.0).unwrap();
    let inner = Universe::new(0.0, 150.0, 1.0).unwrap();
    let flame = Universe::new(0.0, 100.0, 1.0).unwrap();

    assert_eq!(outer.len(), 41);
    assert_eq!(inner.len(), 151);
    assert_eq!(flame.len(), 101);
}

#[test]
fn fractional_steps_produce_dense_grids() {
    let u = Universe::new(0.0, 40.0, 0.1).unwrap();
    assert_eq!(u.len(), 401);
    assert!((u.point(400) - 40.0).abs() < 1e-9);
}

#[test]
fn construction_failures_are_fatal_and_specific() {
    for (min, max, step) in [(40.0, 0.0, 1.0), (0.0, 40.0, 0.0), (0.0, 40.0, -1.0)] {
        match Universe::new(min, max, step) {
            Err(Error::InvalidRange { .. }) => {}
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }
}

#[test]
fn grid_points_are_evenly_spaced() {
    let u = Universe::new(-5.0, 5.0, 0.25).unwrap();
    let points: Vec<f64> = u.points().collect();
    for pair in points.windows(2) {
        assert!((pair[1] - pair[0] - 0.25).abs() < 1e-12);
    }
}
