//! Recursive-descent parser.
//!
//! One method per precedence level, loosest to tightest:
//!
//! - `expression`: `+`, `-` (left-associative)
//! - `term`: `*`, `/`, `mod` (left-associative)
//! - `unary`: leading `+`/`-`, applied over a whole power expression, so
//!   `-2^2` is `-(2^2)`
//! - `power`: `^` (right-associative, `2^-3` allowed)
//! - `postfix`: factorial `!`
//! - `primary`: literals, identifiers, calls, grouping
//!
//! There is no implicit multiplication: `2(3)` is a parse error, not `2*3`.
//! This is a deliberate, documented limitation.

use smallvec::SmallVec;

use crate::ast::{BinOp, Expr};
use crate::error::InvalidExpression;
use crate::token::Token;

/// Parses a token stream into an expression tree.
///
/// # Errors
///
/// Returns [`InvalidExpression`] if the tokens do not form exactly one
/// well-formed expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, InvalidExpression> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if parser.pos == tokens.len() {
        Ok(expr)
    } else {
        Err(InvalidExpression)
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), InvalidExpression> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(InvalidExpression)
        }
    }

    fn expression(&mut self) -> Result<Expr, InvalidExpression> {
        let mut lhs = self.term()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinOp::Add),
            Some(Token::Minus) => Some(BinOp::Sub),
            _ => None,
        } {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, InvalidExpression> {
        let mut lhs = self.unary()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinOp::Mul),
            Some(Token::Slash) => Some(BinOp::Div),
            Some(Token::Mod) => Some(BinOp::Mod),
            _ => None,
        } {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, InvalidExpression> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, InvalidExpression> {
        let base = self.postfix()?;
        if self.peek() == Some(&Token::Caret) {
            self.pos += 1;
            // The exponent re-enters at `unary` so that `2^-3` parses and
            // `2^3^2` associates to the right.
            let exp = self.unary()?;
            Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exp),
            })
        } else {
            Ok(base)
        }
    }

    fn postfix(&mut self) -> Result<Expr, InvalidExpression> {
        let mut expr = self.primary()?;
        while self.peek() == Some(&Token::Bang) {
            self.pos += 1;
            expr = Expr::Factorial(Box::new(expr));
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, InvalidExpression> {
        match self.advance().cloned() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Ident(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.pos += 1;
                    let mut args: SmallVec<[Box<Expr>; 1]> = SmallVec::new();
                    if self.peek() != Some(&Token::RParen) {
                        args.push(Box::new(self.expression()?));
                        while self.peek() == Some(&Token::Comma) {
                            self.pos += 1;
                            args.push(Box::new(self.expression()?));
                        }
                    }
                    self.expect(&Token::RParen)?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            }
            _ => Err(InvalidExpression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn parse_str(input: &str) -> Result<Expr, InvalidExpression> {
        parse(&tokenize(input)?)
    }

    #[test]
    fn precedence_of_mul_over_add() {
        let expr = parse_str("1+2*3").unwrap();
        let Expr::Binary { op: BinOp::Add, rhs, .. } = expr else {
            panic!("expected addition at the root");
        };
        assert!(matches!(*rhs, Expr::Binary { op: BinOp::Mul, .. }));
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse_str("2^3^2").unwrap();
        let Expr::Binary { op: BinOp::Pow, rhs, .. } = expr else {
            panic!("expected power at the root");
        };
        assert!(matches!(*rhs, Expr::Binary { op: BinOp::Pow, .. }));
    }

    #[test]
    fn unary_minus_is_outside_the_power() {
        let expr = parse_str("-2^2").unwrap();
        assert!(matches!(expr, Expr::Neg(_)));
    }

    #[test]
    fn no_implicit_multiplication() {
        assert_eq!(parse_str("2(3)"), Err(InvalidExpression));
    }

    #[test]
    fn rejects_dangling_operators() {
        assert_eq!(parse_str("2+*3"), Err(InvalidExpression));
        assert_eq!(parse_str("2+"), Err(InvalidExpression));
        assert_eq!(parse_str("(2"), Err(InvalidExpression));
    }
}
