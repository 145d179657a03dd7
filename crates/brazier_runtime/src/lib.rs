//! Declarative controller descriptions and serialization for Brazier.
//!
//! This crate provides:
//! - [`ControllerSpec`] - A serde-friendly controller description
//! - [`serialize`] - `MessagePack` save/load for controller descriptions
//! - [`reference`] - The gas-heater reference controller

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod reference;
pub mod serialize;
mod spec;

pub use spec::{ClauseSpec, ControllerSpec, RuleSpec, TermSpec, UniverseSpec, VariableSpec};
