//! Expression tree produced by the parser.

use dashu::float::DBig;
use smallvec::SmallVec;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// Infix `mod` (floored modulo).
    Mod,
    /// `^` (right-associative).
    Pow,
}

/// A parsed expression node.
///
/// The tree is internal to the crate: callers only ever see the rendered
/// result string.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, exact as written.
    Number(DBig),
    /// A named constant such as `pi` or `e`.
    Ident(String),
    /// Unary negation.
    Neg(Box<Expr>),
    /// Postfix factorial.
    Factorial(Box<Expr>),
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// A function application: `name(arg, ...)`.
    Call {
        /// The function name.
        name: String,
        /// The arguments, boxed to keep the node finite. Every builtin
        /// takes exactly one, checked at evaluation time.
        args: SmallVec<[Box<Expr>; 1]>,
    },
}
