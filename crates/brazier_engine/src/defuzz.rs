//! Defuzzification strategies.

use brazier_foundation::{Error, FuzzySet, Result, Universe};

/// Named strategy for reducing an aggregated fuzzy set to one crisp value.
///
/// Only the centroid (center of gravity) is implemented today; further
/// methods (bisector, mean/smallest/largest of maximum) slot in as new
/// variants without touching the aggregation or inference contracts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefuzzMethod {
    /// Center of gravity of the aggregated set.
    #[default]
    Centroid,
}

impl DefuzzMethod {
    /// Looks a method up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "centroid" => Some(Self::Centroid),
            _ => None,
        }
    }

    /// The method's wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
        }
    }
}

/// Reduces `aggregate` to a single crisp value on `universe`.
///
/// `variable` is the output variable's name, carried into the error for
/// host-side reporting.
///
/// # Errors
///
/// Returns [`Error::EmptyAggregate`] when the set carries zero mass (no rule
/// fired). The caller decides whether that means "no action", "hold the last
/// output", or a substitute such as [`Universe::midpoint`]; a NaN from the
/// zero division never escapes.
pub fn defuzzify(
    method: DefuzzMethod,
    aggregate: &FuzzySet,
    universe: &Universe,
    variable: &str,
) -> Result<f64> {
    match method {
        DefuzzMethod::Centroid => centroid(aggregate, universe, variable),
    }
}

fn centroid(aggregate: &FuzzySet, universe: &Universe, variable: &str) -> Result<f64> {
    let mass = aggregate.mass();
    if mass <= 0.0 {
        return Err(Error::EmptyAggregate {
            variable: variable.to_string(),
        });
    }

    let moment: f64 = universe
        .points()
        .zip(aggregate.degrees())
        .map(|(x, d)| x * d)
        .sum();

    Ok(moment / mass)
}
