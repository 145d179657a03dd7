//! Discretized numeric domains.

use crate::error::{Error, Result};

/// A discretized numeric domain over which membership curves are sampled.
///
/// Samples are `min + i * step` for `i` in `0..len()`; the last sample is the
/// largest grid point not exceeding `max`. A universe is immutable after
/// construction and owned by the linguistic variable it describes.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    len: usize,
}

impl Universe {
    /// Creates a universe over `[min, max]` sampled every `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `min >= max`, `step <= 0`, or any
    /// bound is non-finite.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() || min >= max || step <= 0.0 {
            return Err(Error::InvalidRange { min, max, step });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = ((max - min) / step).floor() as usize + 1;

        Ok(Self {
            min,
            max,
            step,
            len,
        })
    }

    /// Lower bound of the domain.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Grid resolution.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Number of sample points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a valid universe has at least one sample.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The `i`-th sample point.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn point(&self, i: usize) -> f64 {
        self.min + (i as f64) * self.step
    }

    /// Iterates over all sample points in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.point(i))
    }

    /// Midpoint of the domain.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Returns true if `x` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}
