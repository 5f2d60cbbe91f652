//! Formula parameter binding.
//!
//! Solving a formula is string substitution into a template followed by
//! evaluation; the substitution layer is isolated behind this narrow
//! interface so a proper variable-binding evaluator could replace it
//! without touching callers.

use sextant_eval::{EvalContext, InvalidExpression};

/// Substitutes named parameters into a formula template.
///
/// Matching is whole-identifier: a parameter named `a` never replaces the
/// `a` inside `abs`, and `m` never matches `m1`. Each substituted value is
/// parenthesized so negative or compound values keep their grouping.
/// Identifiers with no binding are left as written.
///
/// ```rust,ignore
/// let expr = bind("0.5 * m * v^2", &[("m", "3"), ("v", "-2")]);
/// assert_eq!(expr, "0.5 * (3) * (-2)^2");
/// ```
#[must_use]
pub fn bind(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_alphabetic() || c == '_' {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_alphanumeric() || c == '_' {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let ident = &template[start..end];
            match values.iter().find(|(name, _)| *name == ident) {
                Some((_, value)) => {
                    out.push('(');
                    out.push_str(value);
                    out.push(')');
                }
                None => out.push_str(ident),
            }
        } else {
            out.push(c);
            chars.next();
        }
    }

    out
}

/// Binds parameters into a template and evaluates the result.
///
/// # Errors
///
/// Returns [`InvalidExpression`] when the bound expression does not
/// evaluate — including when a template parameter was left unbound.
pub fn solve(
    template: &str,
    values: &[(&str, &str)],
    context: &EvalContext,
) -> Result<String, InvalidExpression> {
    context.evaluate(&bind(template, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_whole_identifiers_only() {
        // `a` must not match inside `abs`.
        assert_eq!(bind("abs(a)", &[("a", "3")]), "abs((3))");
        // `m` must not match inside `m1`.
        assert_eq!(
            bind("m1 * m", &[("m", "2"), ("m1", "5")]),
            "(5) * (2)"
        );
    }

    #[test]
    fn values_are_parenthesized() {
        assert_eq!(bind("-b + b^2", &[("b", "-4")]), "-(-4) + (-4)^2");
    }

    #[test]
    fn unbound_identifiers_pass_through() {
        assert_eq!(bind("pi * r^2", &[("r", "2")]), "pi * (2)^2");
    }

    #[test]
    fn identifier_after_digit_still_binds() {
        // Mirrors regex word-boundary behavior: `2a` has a boundary
        // between the digit and the letter.
        assert_eq!(bind("2a", &[("a", "5")]), "2(5)");
    }

    #[test]
    fn solve_evaluates_the_bound_template() {
        let ctx = EvalContext::new();
        let area = solve("pi * r^2", &[("r", "2")], &ctx).unwrap();
        assert_eq!(area, "12.56637061");

        let hypotenuse = solve("sqrt(a^2 + b^2)", &[("a", "3"), ("b", "4")], &ctx).unwrap();
        assert_eq!(hypotenuse, "5");
    }

    #[test]
    fn unbound_parameter_fails_at_evaluation() {
        let ctx = EvalContext::new();
        assert!(solve("m * a", &[("m", "2")], &ctx).is_err());
    }
}
