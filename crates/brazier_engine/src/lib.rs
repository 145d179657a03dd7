//! Mamdani inference for Brazier.
//!
//! This crate provides:
//! - [`LinguisticVariable`] - Universes partitioned into named terms
//! - [`Rule`] / [`RuleBase`] - Declarative rules compiled to index form
//! - [`Controller`] - The fuzzify → evaluate → aggregate → defuzzify pipeline
//! - [`DefuzzMethod`] - Named defuzzification strategies

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod aggregate;
mod defuzz;
mod inference;
mod rule;
mod variable;

pub use aggregate::aggregate;
pub use defuzz::{DefuzzMethod, defuzzify};
pub use inference::{Controller, InferenceReport, InferenceResult, Inputs};
pub use rule::{Rule, RuleBase, TermRef};
pub use variable::{LinguisticVariable, TermCurve};
