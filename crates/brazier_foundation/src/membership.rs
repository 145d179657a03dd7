//! Triangular membership functions.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::set::FuzzySet;
use crate::universe::Universe;

/// Shape parameters of a triangular membership function.
///
/// The degree is 0 outside `[a, c]`, rises linearly on `[a, b]`, and falls
/// linearly on `[b, c]`, with `degree(b) == 1`. A degenerate foot (`a == b`
/// or `b == c`) keeps degree 1 at the shared endpoint, so terms clamped to a
/// universe boundary stay fully active there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Creates a triangle with feet `a <= b <= c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the feet are out of order or
    /// non-finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || a > b || b > c {
            return Err(Error::InvalidShape { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Left foot.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Peak location.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Right foot.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Membership degree of an arbitrary crisp `x`.
    ///
    /// Exact piecewise-linear point evaluation. Crisp inputs are arbitrary
    /// reals, not grid points, so this never goes through a sampled
    /// lookup table.
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            0.0
        } else if x < self.b {
            // a < b is implied by a <= x < b
            (x - self.a) / (self.b - self.a)
        } else if x > self.b {
            // b < c is implied by b < x <= c
            (self.c - x) / (self.c - self.b)
        } else {
            1.0
        }
    }
}

/// A named membership function: one linguistic term of a variable.
#[derive(Clone, Debug, PartialEq)]
pub struct MembershipFunction {
    name: Arc<str>,
    shape: Triangle,
}

impl MembershipFunction {
    /// Creates a named membership function from a validated shape.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, shape: Triangle) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Creates a named triangular membership function from raw feet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if the feet are out of order or
    /// non-finite.
    pub fn triangular(name: impl Into<Arc<str>>, a: f64, b: f64, c: f64) -> Result<Self> {
        Ok(Self::new(name, Triangle::new(a, b, c)?))
    }

    /// Term name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shape parameters.
    #[must_use]
    pub const fn shape(&self) -> &Triangle {
        &self.shape
    }

    /// Membership degree of a crisp value.
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        self.shape.degree(x)
    }

    /// Samples the curve at every point of `universe`.
    ///
    /// This is the read-only artifact handed to external plotting; inference
    /// evaluates crisp inputs exactly and never reads these samples back for
    /// fuzzification.
    #[must_use]
    pub fn sample(&self, universe: &Universe) -> FuzzySet {
        FuzzySet::from_degrees(universe.points().map(|x| self.shape.degree(x)).collect())
    }
}
