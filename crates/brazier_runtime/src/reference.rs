//! The gas-heater reference controller.
//!
//! Two temperature sensors drive a flame-intensity percentage: outer
//! (ambient) temperature over [0, 40] °C, inner (chamber) temperature over
//! [0, 150] °C, flame output over [0, 100] %. Five rules throttle the flame
//! up when it is cold outside and the chamber is normal, and down toward the
//! pilot level as the chamber runs high or critical.

use crate::spec::{ClauseSpec, ControllerSpec, RuleSpec, TermSpec, UniverseSpec, VariableSpec};

fn term(name: &str, a: f64, b: f64, c: f64) -> TermSpec {
    TermSpec {
        name: name.to_string(),
        a,
        b,
        c,
    }
}

fn clause(variable: &str, term: &str) -> ClauseSpec {
    ClauseSpec {
        variable: variable.to_string(),
        term: term.to_string(),
    }
}

/// Builds the heater controller description.
#[must_use]
pub fn heater() -> ControllerSpec {
    ControllerSpec {
        inputs: vec![
            VariableSpec {
                name: "outer".to_string(),
                universe: UniverseSpec {
                    min: 0.0,
                    max: 40.0,
                    step: 1.0,
                },
                terms: vec![
                    term("low", 0.0, 0.0, 15.0),
                    term("med", 10.0, 20.0, 30.0),
                    term("high", 25.0, 40.0, 40.0),
                ],
            },
            VariableSpec {
                name: "inner".to_string(),
                universe: UniverseSpec {
                    min: 0.0,
                    max: 150.0,
                    step: 1.0,
                },
                terms: vec![
                    term("normal", 0.0, 0.0, 90.0),
                    term("high", 80.0, 100.0, 120.0),
                    term("critical", 110.0, 150.0, 150.0),
                ],
            },
        ],
        output: VariableSpec {
            name: "flame".to_string(),
            universe: UniverseSpec {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
            terms: vec![
                term("low", 0.0, 0.0, 20.0),
                term("med", 10.0, 40.0, 70.0),
                term("high", 60.0, 100.0, 100.0),
            ],
        },
        rules: vec![
            RuleSpec {
                when: vec![clause("outer", "low"), clause("inner", "normal")],
                then: "high".to_string(),
            },
            RuleSpec {
                when: vec![clause("outer", "med"), clause("inner", "normal")],
                then: "med".to_string(),
            },
            RuleSpec {
                when: vec![clause("outer", "high"), clause("inner", "normal")],
                then: "low".to_string(),
            },
            RuleSpec {
                when: vec![clause("inner", "high")],
                then: "med".to_string(),
            },
            RuleSpec {
                when: vec![clause("inner", "critical")],
                then: "low".to_string(),
            },
        ],
        method: "centroid".to_string(),
    }
}
