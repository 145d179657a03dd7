//! End-to-end checks against the heater reference computation.
//!
//! The expected numbers come from working the Mamdani pipeline by hand on
//! the 101-point flame grid: with outer = 10 and inner = 80 only the
//! "outer low AND inner normal → flame high" rule fires, at
//! min(1/3, 1/9) = 1/9. The aggregate is flame_high = (60, 100, 100)
//! clipped at 1/9, whose sampled centroid is 345.75 / 4.25.

use brazier::engine::Inputs;
use brazier::foundation::Error;
use brazier::runtime::{reference, serialize};

const EXPECTED_CENTROID: f64 = 345.75 / 4.25;

#[test]
fn reference_scenario_fuzzification() {
    let controller = reference::heater().build().unwrap();
    let outer = &controller.input_variables()[0];
    let inner = &controller.input_variables()[1];

    let outer_degrees = outer.fuzzify_map(10.0);
    assert!((outer_degrees["low"] - 1.0 / 3.0).abs() < 1e-12);
    assert!(outer_degrees["med"].abs() < f64::EPSILON);
    assert!(outer_degrees["high"].abs() < f64::EPSILON);

    let inner_degrees = inner.fuzzify_map(80.0);
    assert!((inner_degrees["normal"] - 1.0 / 9.0).abs() < 1e-12);
    assert!(inner_degrees["high"].abs() < f64::EPSILON);
    assert!(inner_degrees["critical"].abs() < f64::EPSILON);
}

#[test]
fn reference_scenario_defuzzified_output() {
    let controller = reference::heater().build().unwrap();
    let inputs = Inputs::new().with("outer", 10.0).with("inner", 80.0);

    let result = controller.infer(&inputs).unwrap();
    assert!((result.crisp_output - EXPECTED_CENTROID).abs() < 1e-6);
    assert!(result.crisp_output > 60.0);
    assert!(result.crisp_output < 100.0);
    assert!((result.activation_degree - 1.0 / 9.0).abs() < 1e-9);
}

#[test]
fn reference_scenario_trace() {
    let controller = reference::heater().build().unwrap();
    let inputs = Inputs::new().with("outer", 10.0).with("inner", 80.0);

    let report = controller.infer_report(&inputs).unwrap();

    // Rule strengths: only "outer low AND inner normal -> flame high" fires.
    assert!((report.strengths[0] - 1.0 / 9.0).abs() < 1e-12);
    assert!(report.strengths[1..].iter().all(|s| s.abs() < f64::EPSILON));

    // The aggregate is flame_high clipped at 1/9: zero up to 60, a short
    // linear ramp, then the plateau.
    let degrees = report.aggregate.degrees();
    assert!(degrees[..61].iter().all(|d| d.abs() < f64::EPSILON));
    assert!((degrees[63] - 0.075).abs() < 1e-12);
    assert!((degrees[80] - 1.0 / 9.0).abs() < 1e-12);
    assert!((degrees[100] - 1.0 / 9.0).abs() < 1e-12);
}

#[test]
fn curve_export_covers_all_variables() {
    let controller = reference::heater().build().unwrap();

    for variable in controller.input_variables() {
        let curves = variable.term_curves();
        assert_eq!(curves.len(), 3);
        for curve in &curves {
            assert_eq!(curve.curve.len(), variable.universe().len());
        }
    }

    let flame_curves = controller.output_variable().term_curves();
    let names: Vec<&str> = flame_curves.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(names, ["low", "med", "high"]);
}

#[test]
fn out_of_range_inputs_surface_as_empty_aggregate_not_nan() {
    let controller = reference::heater().build().unwrap();
    let inputs = Inputs::new().with("outer", 20.0).with("inner", 1000.0);

    match controller.infer(&inputs) {
        Err(Error::EmptyAggregate { variable }) => assert_eq!(variable, "flame"),
        other => panic!("expected EmptyAggregate, got {other:?}"),
    }
}

#[test]
fn hot_chamber_throttles_the_flame_down() {
    let controller = reference::heater().build().unwrap();

    let mild = controller
        .infer(&Inputs::new().with("outer", 10.0).with("inner", 80.0))
        .unwrap();
    let critical = controller
        .infer(&Inputs::new().with("outer", 10.0).with("inner", 140.0))
        .unwrap();

    assert!(critical.crisp_output < mild.crisp_output);
    // Critical chamber heat lands in the pilot-flame region.
    assert!(critical.crisp_output < 20.0);
}

#[test]
fn serialized_controller_reproduces_the_reference_output() {
    let spec = reference::heater();
    let restored = serialize::from_bytes(&serialize::to_bytes(&spec).unwrap()).unwrap();

    let original = spec.build().unwrap();
    let rebuilt = restored.build().unwrap();
    let inputs = Inputs::new().with("outer", 10.0).with("inner", 80.0);

    let a = original.infer(&inputs).unwrap();
    let b = rebuilt.infer(&inputs).unwrap();
    assert!((a.crisp_output - b.crisp_output).abs() < f64::EPSILON);
}
