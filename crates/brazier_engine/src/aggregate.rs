//! Max-aggregation of rule activations.

use brazier_foundation::FuzzySet;

/// Combines rule activations by point-wise maximum over the output grid.
///
/// Point-wise max is commutative and associative, so activation order never
/// matters. An empty activation list (no rule fired) yields the all-zero
/// set; whether that is an error is the defuzzifier's decision, not the
/// aggregator's.
#[must_use]
pub fn aggregate<'a, I>(grid_len: usize, activations: I) -> FuzzySet
where
    I: IntoIterator<Item = &'a FuzzySet>,
{
    let mut combined = FuzzySet::zeros(grid_len);
    for activation in activations {
        combined.max_assign(activation);
    }
    combined
}
