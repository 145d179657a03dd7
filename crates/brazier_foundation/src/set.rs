//! Sampled fuzzy sets.

use crate::universe::Universe;

/// A fuzzy set sampled over a universe grid.
///
/// `degrees()[i]` is the membership degree at `universe.point(i)`. Sets are
/// transient: each inference call builds fresh ones and shares nothing with
/// other calls.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    degrees: Vec<f64>,
}

impl FuzzySet {
    /// An all-zero set with `len` samples.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            degrees: vec![0.0; len],
        }
    }

    /// Wraps raw sampled degrees.
    #[must_use]
    pub fn from_degrees(degrees: Vec<f64>) -> Self {
        Self { degrees }
    }

    /// Sampled degrees, aligned with the universe grid.
    #[must_use]
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True if the set has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Point-wise minimum with a scalar strength (Mamdani min-implication).
    #[must_use]
    pub fn clip(&self, strength: f64) -> Self {
        Self {
            degrees: self.degrees.iter().map(|d| d.min(strength)).collect(),
        }
    }

    /// Folds `other` into `self` by point-wise maximum.
    ///
    /// # Panics
    ///
    /// Panics if the sets were sampled over grids of different lengths.
    pub fn max_assign(&mut self, other: &Self) {
        assert_eq!(
            self.degrees.len(),
            other.degrees.len(),
            "fuzzy sets sampled over different grids"
        );
        for (d, o) in self.degrees.iter_mut().zip(&other.degrees) {
            *d = d.max(*o);
        }
    }

    /// Total membership mass across all samples.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.degrees.iter().sum()
    }

    /// Linear interpolation of the sampled curve at an arbitrary `x`.
    ///
    /// Values outside the grid take the nearest boundary sample's degree.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn interp(&self, universe: &Universe, x: f64) -> f64 {
        debug_assert_eq!(self.degrees.len(), universe.len());
        if self.degrees.is_empty() {
            return 0.0;
        }

        let pos = (x - universe.min()) / universe.step();
        let last = self.degrees.len() - 1;
        if pos <= 0.0 {
            return self.degrees[0];
        }
        if pos >= last as f64 {
            return self.degrees[last];
        }

        let i = pos.floor() as usize;
        let frac = pos - (i as f64);
        self.degrees[i] + (self.degrees[i + 1] - self.degrees[i]) * frac
    }
}
