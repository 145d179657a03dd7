//! Brazier - Mamdani fuzzy-inference engine
//!
//! This crate re-exports all layers of the Brazier system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: brazier_runtime    — Controller descriptions, serialization
//! Layer 1: brazier_engine     — Variables, rules, inference, defuzzification
//! Layer 0: brazier_foundation — Core types (Universe, Triangle, FuzzySet, Error)
//! ```

pub use brazier_engine as engine;
pub use brazier_foundation as foundation;
pub use brazier_runtime as runtime;
