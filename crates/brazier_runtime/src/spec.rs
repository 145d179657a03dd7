//! Declarative controller descriptions.
//!
//! A [`ControllerSpec`] is the configuration boundary of the system: hosts
//! deserialize one (from any serde format), call [`ControllerSpec::build`]
//! once, then drive the compiled [`Controller`] with per-call crisp inputs.
//! All invariants are enforced during the build; a rejected description
//! leaves no partial engine behind.

use serde::{Deserialize, Serialize};

use brazier_engine::{Controller, DefuzzMethod, LinguisticVariable, Rule, TermRef};
use brazier_foundation::{Error, MembershipFunction, Result, Universe};

/// Universe bounds and resolution for one variable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniverseSpec {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Grid resolution.
    pub step: f64,
}

/// One named triangular term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermSpec {
    /// Term name, unique within its variable.
    pub name: String,
    /// Left foot.
    pub a: f64,
    /// Peak.
    pub b: f64,
    /// Right foot.
    pub c: f64,
}

/// One linguistic variable: a universe plus ordered terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable name.
    pub name: String,
    /// Universe bounds and step.
    pub universe: UniverseSpec,
    /// Ordered terms partitioning the universe.
    pub terms: Vec<TermSpec>,
}

/// A single antecedent clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseSpec {
    /// Input variable name.
    pub variable: String,
    /// Term name within that variable.
    pub term: String,
}

/// One rule: AND-combined conditions, one output term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Antecedent clauses as (variable, term) name pairs.
    pub when: Vec<ClauseSpec>,
    /// Output term name.
    pub then: String,
}

/// A complete declarative controller description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerSpec {
    /// Input variables, in declaration order.
    pub inputs: Vec<VariableSpec>,
    /// The single output variable.
    pub output: VariableSpec,
    /// Ordered rules (order never affects the result).
    pub rules: Vec<RuleSpec>,
    /// Defuzzification method wire name.
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_method() -> String {
    DefuzzMethod::Centroid.name().to_string()
}

impl VariableSpec {
    fn build(&self) -> Result<LinguisticVariable> {
        let universe = Universe::new(self.universe.min, self.universe.max, self.universe.step)?;
        let terms = self
            .terms
            .iter()
            .map(|t| MembershipFunction::triangular(t.name.as_str(), t.a, t.b, t.c))
            .collect::<Result<Vec<_>>>()?;

        LinguisticVariable::new(self.name.as_str(), universe, terms)
    }
}

impl ControllerSpec {
    /// Compiles and validates the description into a runnable controller.
    ///
    /// # Errors
    ///
    /// Surfaces every configuration invariant violation: bad universe bounds
    /// or steps, out-of-order triangle feet, duplicate term names, rules
    /// naming unknown variables or terms, and unrecognized defuzzification
    /// method names.
    pub fn build(&self) -> Result<Controller> {
        let inputs = self
            .inputs
            .iter()
            .map(VariableSpec::build)
            .collect::<Result<Vec<_>>>()?;
        let output = self.output.build()?;

        let method =
            DefuzzMethod::from_name(&self.method).ok_or_else(|| Error::UnknownMethod {
                method: self.method.clone(),
            })?;

        let rules: Vec<Rule> = self
            .rules
            .iter()
            .map(|r| Rule {
                antecedent: r
                    .when
                    .iter()
                    .map(|c| TermRef::new(c.variable.as_str(), c.term.as_str()))
                    .collect(),
                consequent: r.then.clone(),
            })
            .collect();

        Controller::new(inputs, output, &rules, method)
    }
}
