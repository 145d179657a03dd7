//! Error types for the Brazier system.
//!
//! Uses `thiserror` for ergonomic error definition. Configuration errors
//! (bad universes, bad shapes, dangling rule references) are fatal at
//! construction time: no partial engine exists after one of them. Per-call
//! errors ([`Error::MissingInput`], [`Error::EmptyAggregate`]) leave no state
//! behind, because the engine carries none.

use thiserror::Error;

/// Convenience alias for results carrying a Brazier [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Brazier operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Universe bounds or resolution are unusable.
    #[error("invalid universe range: min {min}, max {max}, step {step}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
        /// Requested grid resolution.
        step: f64,
    },

    /// Triangle feet are out of order or non-finite.
    #[error("invalid triangle shape: ({a}, {b}, {c})")]
    InvalidShape {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },

    /// A variable declares the same term name twice.
    #[error("duplicate term '{term}' in variable '{variable}'")]
    DuplicateTerm {
        /// The variable declaring the terms.
        variable: String,
        /// The repeated term name.
        term: String,
    },

    /// A rule references a variable the controller does not know.
    #[error("rule {rule} references unknown variable '{variable}'")]
    UnknownVariable {
        /// Zero-based index of the offending rule.
        rule: usize,
        /// The unresolved variable name.
        variable: String,
    },

    /// A rule references a term its variable does not define.
    #[error("rule {rule} references unknown term '{term}' of variable '{variable}'")]
    UnknownTerm {
        /// Zero-based index of the offending rule.
        rule: usize,
        /// The variable that was searched.
        variable: String,
        /// The unresolved term name.
        term: String,
    },

    /// A rule has no antecedent clauses.
    #[error("rule {rule} has an empty antecedent")]
    EmptyAntecedent {
        /// Zero-based index of the offending rule.
        rule: usize,
    },

    /// The requested defuzzification method is not registered.
    #[error("unknown defuzzification method '{method}'")]
    UnknownMethod {
        /// The unresolved method name.
        method: String,
    },

    /// An inference call omitted a crisp value for an input variable.
    #[error("missing crisp input for variable '{variable}'")]
    MissingInput {
        /// The input variable without a value.
        variable: String,
    },

    /// No rule fired: the aggregated output set carries zero mass.
    ///
    /// Recoverable per call. The host decides whether this means "no action",
    /// "hold the last output", or a fallback value; it is how "input outside
    /// the modeled operating range" surfaces, as opposed to a broken
    /// configuration.
    #[error("empty aggregate for output variable '{variable}': no rule fired")]
    EmptyAggregate {
        /// The output variable whose aggregate was all-zero.
        variable: String,
    },

    /// Controller description (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a controller description file failed.
    #[error("io error: {0}")]
    Io(String),
}
