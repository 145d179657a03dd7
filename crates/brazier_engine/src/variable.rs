//! Linguistic variables and fuzzification.

use std::collections::BTreeMap;
use std::sync::Arc;

use brazier_foundation::{Error, FuzzySet, MembershipFunction, Result, Universe};

/// A named quantity partitioned into ordered, uniquely named fuzzy terms.
///
/// Built once at configuration time and read-only afterward; the universe is
/// owned by the variable.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: Arc<str>,
    universe: Universe,
    terms: Vec<MembershipFunction>,
}

impl LinguisticVariable {
    /// Creates a variable from its universe and ordered terms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTerm`] if two terms share a name.
    pub fn new(
        name: impl Into<Arc<str>>,
        universe: Universe,
        terms: Vec<MembershipFunction>,
    ) -> Result<Self> {
        let name = name.into();
        for (i, term) in terms.iter().enumerate() {
            if terms[..i].iter().any(|t| t.name() == term.name()) {
                return Err(Error::DuplicateTerm {
                    variable: name.to_string(),
                    term: term.name().to_string(),
                });
            }
        }
        Ok(Self {
            name,
            universe,
            terms,
        })
    }

    /// Variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The discretized domain.
    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Ordered terms.
    #[must_use]
    pub fn terms(&self) -> &[MembershipFunction] {
        &self.terms
    }

    /// Index of the term with the given name.
    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name() == term)
    }

    /// Membership degrees of `crisp` across all terms, in term order.
    ///
    /// Exact point evaluation, so off-grid inputs carry no discretization
    /// error. Values outside the universe are accepted and score 0 on every
    /// term whose support they miss; terms clamped to a boundary keep their
    /// plateau degree there.
    #[must_use]
    pub fn fuzzify(&self, crisp: f64) -> Vec<f64> {
        self.terms.iter().map(|t| t.degree(crisp)).collect()
    }

    /// Named form of [`fuzzify`](Self::fuzzify) for external consumers.
    #[must_use]
    pub fn fuzzify_map(&self, crisp: f64) -> BTreeMap<String, f64> {
        self.terms
            .iter()
            .map(|t| (t.name().to_string(), t.degree(crisp)))
            .collect()
    }

    /// Sampled curves for every term, for the plotting collaborator.
    #[must_use]
    pub fn term_curves(&self) -> Vec<TermCurve> {
        self.terms
            .iter()
            .map(|t| TermCurve {
                term: t.name().to_string(),
                curve: t.sample(&self.universe),
            })
            .collect()
    }
}

/// A term's membership curve sampled over its variable's universe.
#[derive(Clone, Debug)]
pub struct TermCurve {
    /// Term name.
    pub term: String,
    /// Sampled degrees, aligned with the variable's universe grid.
    pub curve: FuzzySet,
}
