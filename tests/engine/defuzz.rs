//! Integration tests for defuzzification strategies.

use brazier::engine::{DefuzzMethod, aggregate, defuzzify};
use brazier::foundation::{Error, MembershipFunction, Universe};

#[test]
fn centroid_of_single_symmetric_activation_is_the_peak() {
    let universe = Universe::new(0.0, 100.0, 1.0).unwrap();
    let med = MembershipFunction::triangular("med", 10.0, 40.0, 70.0).unwrap();

    // Only flame_med fires, at full strength.
    let activation = med.sample(&universe);
    let combined = aggregate(universe.len(), [&activation]);

    let out = defuzzify(DefuzzMethod::Centroid, &combined, &universe, "flame").unwrap();
    assert!((out - 40.0).abs() < 1e-9);
}

#[test]
fn centroid_lies_inside_the_supported_region() {
    let universe = Universe::new(0.0, 100.0, 1.0).unwrap();
    let high = MembershipFunction::triangular("high", 60.0, 100.0, 100.0).unwrap();

    for strength in [0.1, 0.5, 1.0] {
        let activation = high.sample(&universe).clip(strength);
        let combined = aggregate(universe.len(), [&activation]);
        let out = defuzzify(DefuzzMethod::Centroid, &combined, &universe, "flame").unwrap();
        assert!(out > 60.0, "centroid {out} left of support at {strength}");
        assert!(out < 100.0, "centroid {out} right of support at {strength}");
    }
}

#[test]
fn all_zero_aggregate_is_a_recoverable_error() {
    let universe = Universe::new(0.0, 100.0, 1.0).unwrap();
    let combined = aggregate(universe.len(), []);

    match defuzzify(DefuzzMethod::Centroid, &combined, &universe, "flame") {
        Err(Error::EmptyAggregate { variable }) => assert_eq!(variable, "flame"),
        other => panic!("expected EmptyAggregate, got {other:?}"),
    }
}

#[test]
fn method_selection_by_name() {
    assert_eq!(
        DefuzzMethod::from_name("centroid"),
        Some(DefuzzMethod::Centroid)
    );
    assert_eq!(DefuzzMethod::from_name("mean-of-maximum"), None);
}
