//! Tree-walking evaluation over extended-precision decimals.
//!
//! All arithmetic runs in `DBig` at the context's working precision.
//! Functions with no native extended-precision implementation (`sin`,
//! `cos`, `tan`, non-integer gamma) bridge through f64; since the display
//! precision is 10 digits and f64 carries ~16, the bridge cannot perturb a
//! rendered result.

use dashu::base::{Sign, SquareRoot};
use dashu::float::round::mode::HalfAway;
use dashu::float::{DBig, FBig};
use dashu::integer::IBig;

use crate::ast::{BinOp, Expr};
use crate::context::{Builtin, EvalContext, Function};
use crate::error::InvalidExpression;
use crate::gamma::gamma;

/// Largest operand accepted by the integer factorial.
///
/// Keeps every call bounded; the display precision cannot distinguish
/// anything past a few hundred digits of magnitude anyway.
const MAX_FACTORIAL: i64 = 1000;

impl EvalContext {
    /// Evaluates a parsed expression to a value at working precision.
    pub(crate) fn eval_expr(&self, expr: &Expr) -> Result<DBig, InvalidExpression> {
        match expr {
            Expr::Number(value) => Ok(value.clone().with_precision(self.precision()).value()),
            Expr::Ident(name) => match self.lookup(name) {
                Some(Builtin::Constant(literal)) => self.constant(literal),
                // A bare function name is not a value.
                _ => Err(InvalidExpression),
            },
            Expr::Neg(inner) => Ok(-self.eval_expr(inner)?),
            Expr::Factorial(inner) => {
                let value = self.eval_expr(inner)?;
                self.factorial(&value)
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                self.binary(*op, &lhs, &rhs)
            }
            Expr::Call { name, args } => {
                let Some(Builtin::Function(function)) = self.lookup(name) else {
                    return Err(InvalidExpression);
                };
                // Every builtin is unary.
                if args.len() != 1 {
                    return Err(InvalidExpression);
                }
                let arg = self.eval_expr(&args[0])?;
                self.apply(function, arg)
            }
        }
    }

    fn binary(&self, op: BinOp, lhs: &DBig, rhs: &DBig) -> Result<DBig, InvalidExpression> {
        match op {
            BinOp::Add => Ok(lhs + rhs),
            BinOp::Sub => Ok(lhs - rhs),
            BinOp::Mul => Ok(lhs * rhs),
            BinOp::Div => {
                if *rhs == DBig::ZERO {
                    // DBig has no infinity to render; division by zero is
                    // the sentinel.
                    return Err(InvalidExpression);
                }
                Ok(lhs / rhs)
            }
            BinOp::Mod => {
                if *rhs == DBig::ZERO {
                    return Err(InvalidExpression);
                }
                // Floored modulo: the result takes the divisor's sign.
                let quotient = (lhs / rhs).floor();
                Ok(lhs - &quotient * rhs)
            }
            BinOp::Pow => self.pow(lhs, rhs),
        }
    }

    fn apply(&self, function: Function, arg: DBig) -> Result<DBig, InvalidExpression> {
        match function {
            Function::Sqrt => {
                if arg.sign() == Sign::Negative {
                    return Err(InvalidExpression);
                }
                Ok(arg.sqrt())
            }
            Function::Abs => {
                if arg.sign() == Sign::Negative {
                    Ok(-arg)
                } else {
                    Ok(arg)
                }
            }
            Function::Log => {
                if arg <= DBig::ZERO {
                    return Err(InvalidExpression);
                }
                Ok(arg.ln())
            }
            Function::Log10 => {
                if arg <= DBig::ZERO {
                    return Err(InvalidExpression);
                }
                let ten = DBig::from(IBig::from(10))
                    .with_precision(self.precision())
                    .value();
                Ok(arg.ln() / ten.ln())
            }
            Function::Sin => self.through_f64(&arg, f64::sin),
            Function::Cos => self.through_f64(&arg, f64::cos),
            Function::Tan => self.through_f64(&arg, f64::tan),
        }
    }

    /// Exponentiation: exact square-and-multiply for integral exponents,
    /// `exp(y·ln x)` otherwise (positive base required).
    fn pow(&self, base: &DBig, exponent: &DBig) -> Result<DBig, InvalidExpression> {
        if is_integral(exponent) {
            let n = to_i64(exponent)?;
            self.pow_integer(base, n)
        } else if *base > DBig::ZERO {
            Ok((exponent * base.clone().ln()).exp())
        } else {
            // Negative base with fractional exponent has no real value.
            Err(InvalidExpression)
        }
    }

    fn pow_integer(&self, base: &DBig, n: i64) -> Result<DBig, InvalidExpression> {
        let one = DBig::ONE.with_precision(self.precision()).value();
        if n == 0 {
            return Ok(one);
        }

        let mut result = one.clone();
        let mut square = base.clone();
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = &result * &square;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = &square * &square;
            }
        }

        if n < 0 {
            if result == DBig::ZERO {
                return Err(InvalidExpression);
            }
            result = one / result;
        }
        Ok(result)
    }

    /// Postfix factorial: exact over `IBig` for nonnegative integers,
    /// gamma extension for fractional operands.
    fn factorial(&self, value: &DBig) -> Result<DBig, InvalidExpression> {
        if is_integral(value) {
            let n = to_i64(value)?;
            if !(0..=MAX_FACTORIAL).contains(&n) {
                return Err(InvalidExpression);
            }
            let mut product = IBig::ONE;
            for k in 2..=n {
                product *= IBig::from(k);
            }
            Ok(DBig::from(product).with_precision(self.precision()).value())
        } else {
            let x = value.to_f64().value();
            self.from_f64(gamma(x + 1.0))
        }
    }

    fn through_f64(
        &self,
        arg: &DBig,
        function: impl Fn(f64) -> f64,
    ) -> Result<DBig, InvalidExpression> {
        self.from_f64(function(arg.to_f64().value()))
    }

    fn from_f64(&self, x: f64) -> Result<DBig, InvalidExpression> {
        if !x.is_finite() {
            return Err(InvalidExpression);
        }
        let binary = FBig::<HalfAway, 2>::try_from(x).map_err(|_| InvalidExpression)?;
        Ok(binary
            .to_decimal()
            .value()
            .with_precision(self.precision())
            .value())
    }
}

/// True if the value has no fractional part.
fn is_integral(value: &DBig) -> bool {
    value.clone().trunc() == *value
}

/// Converts an integral value to i64, failing on overflow.
fn to_i64(value: &DBig) -> Result<i64, InvalidExpression> {
    let integer: IBig = value.clone().to_int().value();
    i64::try_from(integer).map_err(|_| InvalidExpression)
}
