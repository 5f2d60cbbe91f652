//! # sextant-matrix
//!
//! Dense matrix algebra with dimension validation.
//!
//! This crate provides:
//! - A row-major dense [`Matrix`] with value semantics
//! - Elementwise sum/difference and the standard product
//! - Determinant and inverse with a 6-decimal rounding policy
//! - Transpose and shape-preserving resize
//!
//! Matrix size is not capped: callers may pass any rectangular shape, and
//! the product parallelizes via rayon once matrices get large.
//!
//! ## Rounding policy
//!
//! Determinant and inverse entries are rounded to 6 decimal places, and
//! the inverse's singularity check compares the *rounded* determinant to
//! zero. See [`Matrix::determinant`] and [`Matrix::inverse`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod matrix;
mod ops;
mod solve;

pub use error::MatrixError;
pub use matrix::Matrix;


#[cfg(test)]
mod proptests;
