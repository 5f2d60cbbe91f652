//! # sextant-eval
//!
//! Extended-precision scientific expression evaluator.
//!
//! Parses and evaluates textual arithmetic expressions — infix operators,
//! named constants, unary functions, postfix factorial — into a canonical
//! result string:
//!
//! - Arithmetic runs in 64-digit decimal floats (`dashu`), not native f64,
//!   so large and precise intermediate results do not pick up binary
//!   rounding artifacts.
//! - Results render at 10 significant digits, switching to scientific
//!   notation outside the exponent range [−9, 9].
//! - Every failure collapses to the single [`InvalidExpression`] sentinel.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sextant_eval::evaluate;
//!
//! assert_eq!(evaluate("2^10").unwrap(), "1024");
//! assert_eq!(evaluate("sqrt(16)").unwrap(), "4");
//! assert!(evaluate("2+*3").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// The expression tree and token stream are internal: callers only ever
// see the rendered result string or the sentinel.
mod ast;
mod context;
mod error;
mod eval;
mod format;
mod gamma;
mod parser;
mod token;

pub use context::{EvalContext, WORKING_PRECISION};
pub use error::InvalidExpression;
pub use format::DISPLAY_DIGITS;

/// Evaluates an expression with the default context.
///
/// Equivalent to `EvalContext::new().evaluate(expression)`; build an
/// [`EvalContext`] once instead when evaluating in a loop.
///
/// # Errors
///
/// Returns [`InvalidExpression`] for any parse or evaluation fault.
pub fn evaluate(expression: &str) -> Result<String, InvalidExpression> {
    EvalContext::new().evaluate(expression)
}


#[cfg(test)]
mod proptests;
