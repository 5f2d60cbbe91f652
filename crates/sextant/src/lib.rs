//! # Sextant
//!
//! Calculator core: scientific expression evaluation and matrix algebra.
//!
//! Sextant is the computation engine behind a calculator suite. It is a
//! pure, synchronous library: no I/O, no persistence, no shared state —
//! presentation layers consume it one call at a time.
//!
//! - **Expression evaluation**: 64-digit decimal arithmetic, 10-digit
//!   canonical rendering, single sentinel error
//! - **Matrix algebra**: add/subtract/multiply/determinant/inverse/
//!   transpose with dimension validation and a 6-decimal rounding policy
//! - **Formula solving**: whole-identifier template binding
//! - **Finance**: simple/compound interest and EMI
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sextant::prelude::*;
//!
//! assert_eq!(evaluate("2^10").unwrap(), "1024");
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! assert_eq!(a.determinant().unwrap(), -2.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sextant_eval as eval;
pub use sextant_finance as finance;
pub use sextant_formula as formula;
pub use sextant_matrix as matrix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sextant_eval::{evaluate, EvalContext, InvalidExpression};
    pub use sextant_finance::{compound_interest, emi, simple_interest};
    pub use sextant_formula::{bind, solve};
    pub use sextant_matrix::{Matrix, MatrixError};
}
