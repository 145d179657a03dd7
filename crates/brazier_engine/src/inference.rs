//! The Mamdani inference pipeline.

use std::collections::BTreeMap;

use brazier_foundation::{Error, FuzzySet, Result};

use crate::aggregate::aggregate;
use crate::defuzz::{DefuzzMethod, defuzzify};
use crate::rule::{Rule, RuleBase};
use crate::variable::LinguisticVariable;

/// Crisp inputs for one inference call, keyed by input-variable name.
#[derive(Clone, Debug, Default)]
pub struct Inputs(BTreeMap<String, f64>);

impl Inputs {
    /// Creates an empty input set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets the crisp value for a variable, replacing any previous value.
    pub fn set(&mut self, variable: impl Into<String>, value: f64) {
        self.0.insert(variable.into(), value);
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    /// The crisp value recorded for `variable`, if any.
    #[must_use]
    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }
}

/// The defuzzified output and its degree in the aggregated set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferenceResult {
    /// The crisp control output.
    pub crisp_output: f64,
    /// Interpolated membership of the output in the aggregated set.
    /// Annotation for reporting and plotting; nothing feeds it back into
    /// control.
    pub activation_degree: f64,
}

/// Read-only trace of one inference call, for the plotting collaborator.
#[derive(Clone, Debug)]
pub struct InferenceReport {
    /// The final result.
    pub result: InferenceResult,
    /// Per-rule antecedent strengths, in rule order.
    pub strengths: Vec<f64>,
    /// Per-rule clipped activations on the output grid, in rule order.
    pub activations: Vec<FuzzySet>,
    /// The aggregated output set.
    pub aggregate: FuzzySet,
}

/// A compiled Mamdani controller: immutable configuration, stateless calls.
///
/// Construction validates everything; afterward the controller is a pure
/// function of its inputs, shares no mutable state between calls, and may be
/// used from any number of threads at once.
#[derive(Clone, Debug)]
pub struct Controller {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    rules: RuleBase,
    method: DefuzzMethod,
    // Output term curves sampled once at construction; inference only clips
    // and folds them.
    consequent_curves: Vec<FuzzySet>,
}

impl Controller {
    /// Builds a controller from its variables and declarative rules.
    ///
    /// # Errors
    ///
    /// Propagates every rule-compilation error from [`RuleBase::compile`];
    /// a failed build leaves no partially usable controller behind.
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rules: &[Rule],
        method: DefuzzMethod,
    ) -> Result<Self> {
        let rule_base = RuleBase::compile(rules, &inputs, &output)?;
        let consequent_curves = output
            .terms()
            .iter()
            .map(|t| t.sample(output.universe()))
            .collect();

        Ok(Self {
            inputs,
            output,
            rules: rule_base,
            method,
            consequent_curves,
        })
    }

    /// Input variables, in declaration order.
    #[must_use]
    pub fn input_variables(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    /// The output variable.
    #[must_use]
    pub const fn output_variable(&self) -> &LinguisticVariable {
        &self.output
    }

    /// The configured defuzzification method.
    #[must_use]
    pub const fn method(&self) -> DefuzzMethod {
        self.method
    }

    /// Number of compiled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs the full pipeline for one crisp-input tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if a variable has no crisp value and
    /// [`Error::EmptyAggregate`] if no rule fired for these inputs. Neither
    /// corrupts anything: the next call starts from the same immutable
    /// configuration.
    pub fn infer(&self, inputs: &Inputs) -> Result<InferenceResult> {
        let fuzzified = self.fuzzified(inputs)?;
        let strengths = self.rules.strengths(&fuzzified);

        // Zero-strength rules contribute an all-zero activation; skipping
        // them cannot change the point-wise maximum.
        let activations: Vec<FuzzySet> = self
            .rules
            .rules()
            .iter()
            .zip(&strengths)
            .filter(|&(_, &strength)| strength > 0.0)
            .map(|(rule, &strength)| self.consequent_curves[rule.consequent()].clip(strength))
            .collect();

        let combined = aggregate(self.output.universe().len(), &activations);
        self.finish(&combined)
    }

    /// Like [`infer`](Self::infer), additionally returning per-rule
    /// strengths, clipped activations, and the aggregated set.
    ///
    /// # Errors
    ///
    /// Same conditions as [`infer`](Self::infer).
    pub fn infer_report(&self, inputs: &Inputs) -> Result<InferenceReport> {
        let fuzzified = self.fuzzified(inputs)?;
        let strengths = self.rules.strengths(&fuzzified);

        // Keep one activation per rule, zero-strength ones included, so the
        // trace lines up with the rule base.
        let activations: Vec<FuzzySet> = self
            .rules
            .rules()
            .iter()
            .zip(&strengths)
            .map(|(rule, &strength)| self.consequent_curves[rule.consequent()].clip(strength))
            .collect();

        let combined = aggregate(self.output.universe().len(), &activations);
        let result = self.finish(&combined)?;

        Ok(InferenceReport {
            result,
            strengths,
            activations,
            aggregate: combined,
        })
    }

    fn fuzzified(&self, inputs: &Inputs) -> Result<Vec<Vec<f64>>> {
        self.inputs
            .iter()
            .map(|var| {
                let crisp = inputs.get(var.name()).ok_or_else(|| Error::MissingInput {
                    variable: var.name().to_string(),
                })?;
                Ok(var.fuzzify(crisp))
            })
            .collect()
    }

    fn finish(&self, combined: &FuzzySet) -> Result<InferenceResult> {
        let universe = self.output.universe();
        let crisp_output = defuzzify(self.method, combined, universe, self.output.name())?;
        let activation_degree = combined.interp(universe, crisp_output);

        Ok(InferenceResult {
            crisp_output,
            activation_degree,
        })
    }
}
