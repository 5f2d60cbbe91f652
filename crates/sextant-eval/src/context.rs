//! The evaluation context and its fixed symbol table.
//!
//! The table is a fixed, versioned set of named constants and functions
//! baked in at construction. It is deliberately not extensible at runtime:
//! the application's wider scientific-constant table (gravitational
//! constant, speed of light, ...) is *not* part of the evaluator scope and
//! must be bound into the expression text by the caller.

use dashu::float::DBig;
use rustc_hash::FxHashMap;

use crate::error::InvalidExpression;
use crate::format;
use crate::parser::parse;
use crate::token::tokenize;

/// Internal arithmetic precision, in significant decimal digits.
///
/// Larger than the display precision so compounded rounding error never
/// reaches the rendered result.
pub const WORKING_PRECISION: usize = 64;

/// Pi to well past the working precision.
const PI: &str = "3.141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067";

/// Euler's number to well past the working precision.
const E: &str = "2.718281828459045235360287471352662497757247093699959574966967627724076630353547594571382178525166427";

/// A builtin unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Function {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Log,
    Log10,
    Sqrt,
    Abs,
}

/// An entry in the symbol table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Builtin {
    /// A named constant, stored as its decimal literal.
    Constant(&'static str),
    /// A unary function.
    Function(Function),
}

/// An immutable evaluation context.
///
/// Construction is cheap; a context can be reused across any number of
/// independent `evaluate` calls. There is no shared or mutable state.
#[derive(Debug, Clone)]
pub struct EvalContext {
    precision: usize,
    symbols: FxHashMap<&'static str, Builtin>,
}

impl EvalContext {
    /// Creates a context with the builtin symbol set at the standard
    /// working precision.
    #[must_use]
    pub fn new() -> Self {
        let mut symbols = FxHashMap::default();
        symbols.insert("pi", Builtin::Constant(PI));
        symbols.insert("e", Builtin::Constant(E));
        symbols.insert("sin", Builtin::Function(Function::Sin));
        symbols.insert("cos", Builtin::Function(Function::Cos));
        symbols.insert("tan", Builtin::Function(Function::Tan));
        symbols.insert("log", Builtin::Function(Function::Log));
        symbols.insert("log10", Builtin::Function(Function::Log10));
        symbols.insert("sqrt", Builtin::Function(Function::Sqrt));
        symbols.insert("abs", Builtin::Function(Function::Abs));
        Self {
            precision: WORKING_PRECISION,
            symbols,
        }
    }

    /// The working precision in significant decimal digits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<Builtin> {
        self.symbols.get(name).copied()
    }

    /// Resolves a named constant to its value at working precision.
    pub(crate) fn constant(&self, literal: &'static str) -> Result<DBig, InvalidExpression> {
        let exact = literal.parse::<DBig>().map_err(|_| InvalidExpression)?;
        Ok(exact.with_precision(self.precision).value())
    }

    /// Evaluates an expression to its canonical rendered result.
    ///
    /// Display-only glyphs are replaced with their canonical spellings
    /// before lexing: `×` → `*`, `÷` → `/`, `π` → `pi`, `√` → `sqrt`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidExpression`] for any parse or evaluation fault.
    pub fn evaluate(&self, expression: &str) -> Result<String, InvalidExpression> {
        let canonical = canonicalize(expression);
        let tokens = tokenize(&canonical)?;
        let ast = parse(&tokens)?;
        let value = self.eval_expr(&ast)?;
        Ok(format::render(&value))
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces display glyphs with canonical operator and function names.
///
/// Note the absence of implicit-multiplication insertion: `2(3)` stays as
/// written and fails to parse.
fn canonicalize(expression: &str) -> String {
    expression
        .replace('×', "*")
        .replace('÷', "/")
        .replace('π', "pi")
        .replace('√', "sqrt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_canonicalized() {
        assert_eq!(canonicalize("2×3÷4"), "2*3/4");
        assert_eq!(canonicalize("√(π)"), "sqrt(pi)");
    }

    #[test]
    fn constants_resolve_at_working_precision() {
        let ctx = EvalContext::new();
        let Some(Builtin::Constant(literal)) = ctx.lookup("pi") else {
            panic!("pi must be a constant");
        };
        let pi = ctx.constant(literal).unwrap();
        assert_eq!(pi.precision(), WORKING_PRECISION);
    }

    #[test]
    fn extended_constants_are_not_in_scope() {
        // The app's scientific-constant table (G, c, h, ...) is bound by
        // callers, never resolved here.
        let ctx = EvalContext::new();
        assert!(ctx.lookup("G").is_none());
        assert!(ctx.lookup("c").is_none());
    }
}
