//! Core numeric types for the Brazier fuzzy-control system.
//!
//! This crate provides:
//! - [`Universe`] - Discretized numeric domains
//! - [`Triangle`] / [`MembershipFunction`] - Triangular membership curves
//! - [`FuzzySet`] - Membership degrees sampled over a universe grid
//! - [`Error`] - Error types shared across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod membership;
mod set;
mod universe;

pub use error::{Error, Result};
pub use membership::{MembershipFunction, Triangle};
pub use set::FuzzySet;
pub use universe::Universe;
