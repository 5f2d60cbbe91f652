//! # sextant-formula
//!
//! Formula template binding on top of the expression evaluator.
//!
//! A formula is a plain expression template with named parameters
//! (`0.5 * m * v^2`). Solving substitutes numeric values for whole
//! identifiers and evaluates the result; the substitution rules live in
//! [`bind`]. The crate also carries the reference tables of scientific
//! constants and molar masses that callers bind in explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bind;
pub mod constants;

pub use bind::{bind, solve};
pub use constants::{
    constant, molecular_mass, ScientificConstant, MOLECULAR_MASSES, SCIENTIFIC_CONSTANTS,
};
