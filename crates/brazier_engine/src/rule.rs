//! Fuzzy rules and the compiled rule base.
//!
//! Rules are written against variable and term names; [`RuleBase::compile`]
//! resolves every name to an index once, so all dangling references surface
//! before the first inference call and evaluation is pure lookups afterward.

use brazier_foundation::{Error, Result};

use crate::variable::LinguisticVariable;

/// A reference to one term of one input variable, by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermRef {
    /// Input variable name.
    pub variable: String,
    /// Term name within that variable.
    pub term: String,
}

impl TermRef {
    /// Creates a reference from variable and term names.
    #[must_use]
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// A declarative fuzzy rule.
///
/// The antecedent clauses are combined by fuzzy AND (minimum); the consequent
/// names a term of the output variable. Rules are static configuration,
/// evaluated independently: declaration order never affects the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Antecedent clauses, AND-combined.
    pub antecedent: Vec<TermRef>,
    /// Output term activated by this rule.
    pub consequent: String,
}

impl Rule {
    /// Rule with a single antecedent clause.
    #[must_use]
    pub fn when(
        variable: impl Into<String>,
        term: impl Into<String>,
        consequent: impl Into<String>,
    ) -> Self {
        Self {
            antecedent: vec![TermRef::new(variable, term)],
            consequent: consequent.into(),
        }
    }

    /// Rule AND-ing several clauses.
    #[must_use]
    pub fn when_all(antecedent: Vec<TermRef>, consequent: impl Into<String>) -> Self {
        Self {
            antecedent,
            consequent: consequent.into(),
        }
    }
}

/// A rule with every name resolved to (variable, term) indices.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    antecedent: Vec<(usize, usize)>,
    consequent: usize,
}

impl CompiledRule {
    /// Antecedent strength: fuzzy AND (minimum) over clause degrees.
    ///
    /// A single-clause rule takes its degree directly; the fold is the same
    /// computation either way.
    pub(crate) fn strength(&self, fuzzified: &[Vec<f64>]) -> f64 {
        self.antecedent
            .iter()
            .map(|&(var, term)| fuzzified[var][term])
            .fold(f64::INFINITY, f64::min)
    }

    /// Index of the activated output term.
    pub(crate) const fn consequent(&self) -> usize {
        self.consequent
    }
}

/// An index-resolved rule base, validated once against its variables.
#[derive(Clone, Debug)]
pub struct RuleBase {
    rules: Vec<CompiledRule>,
}

impl RuleBase {
    /// Compiles declarative rules against the known input variables and the
    /// output variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAntecedent`] for a rule with no clauses,
    /// [`Error::UnknownVariable`] for a clause naming no input variable, and
    /// [`Error::UnknownTerm`] for a clause or consequent naming no term of
    /// its variable. All of these are fatal configuration errors: no rule
    /// base exists afterward.
    pub fn compile(
        rules: &[Rule],
        inputs: &[LinguisticVariable],
        output: &LinguisticVariable,
    ) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if rule.antecedent.is_empty() {
                return Err(Error::EmptyAntecedent { rule: index });
            }

            let mut antecedent = Vec::with_capacity(rule.antecedent.len());
            for clause in &rule.antecedent {
                let var = inputs
                    .iter()
                    .position(|v| v.name() == clause.variable)
                    .ok_or_else(|| Error::UnknownVariable {
                        rule: index,
                        variable: clause.variable.clone(),
                    })?;
                let term =
                    inputs[var]
                        .term_index(&clause.term)
                        .ok_or_else(|| Error::UnknownTerm {
                            rule: index,
                            variable: clause.variable.clone(),
                            term: clause.term.clone(),
                        })?;
                antecedent.push((var, term));
            }

            let consequent =
                output
                    .term_index(&rule.consequent)
                    .ok_or_else(|| Error::UnknownTerm {
                        rule: index,
                        variable: output.name().to_string(),
                        term: rule.consequent.clone(),
                    })?;

            compiled.push(CompiledRule {
                antecedent,
                consequent,
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the base holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Per-rule antecedent strengths, in rule order.
    ///
    /// `fuzzified[v][t]` is the degree of input variable `v`'s term `t`.
    /// Each rule is evaluated independently, so permuting the rule base
    /// permutes the strengths and changes nothing else.
    #[must_use]
    pub fn strengths(&self, fuzzified: &[Vec<f64>]) -> Vec<f64> {
        self.rules.iter().map(|r| r.strength(fuzzified)).collect()
    }

    pub(crate) fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}
