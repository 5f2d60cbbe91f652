//! Result rendering.
//!
//! Values are rendered at a fixed display precision of 10 significant
//! digits, far below the working precision, so internal rounding noise
//! never shows. Results whose decimal exponent falls below −9 or above 9
//! switch to scientific notation; integral results render without a
//! decimal point or trailing zeros.

use dashu::base::Abs;
use dashu::float::DBig;
use dashu::integer::IBig;

/// Significant digits in a rendered result.
pub const DISPLAY_DIGITS: usize = 10;

/// Decimal exponents below this render in scientific notation.
const LOWER_EXP: isize = -9;

/// Decimal exponents above this render in scientific notation.
const UPPER_EXP: isize = 9;

/// Renders a value as its canonical decimal or scientific string.
#[must_use]
pub fn render(value: &DBig) -> String {
    if *value == DBig::ZERO {
        return "0".to_string();
    }

    let rounded = value.clone().with_precision(DISPLAY_DIGITS).value();
    let repr = rounded.repr();
    let mut significand: IBig = repr.significand().clone();
    let mut exponent: isize = repr.exponent();

    // Normalize away trailing zeros so `5.000` and `5` render identically.
    let ten = IBig::from(10);
    while significand != IBig::ZERO && &significand % &ten == IBig::ZERO {
        significand /= &ten;
        exponent += 1;
    }

    let negative = significand < IBig::ZERO;
    let digits = significand.abs().to_string();
    let sci_exponent = digits.len() as isize - 1 + exponent;

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if sci_exponent < LOWER_EXP || sci_exponent > UPPER_EXP {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        if sci_exponent >= 0 {
            out.push('+');
        }
        out.push_str(&sci_exponent.to_string());
    } else if exponent >= 0 {
        out.push_str(&digits);
        for _ in 0..exponent {
            out.push('0');
        }
    } else {
        let point = digits.len() as isize + exponent;
        if point > 0 {
            let point = point as usize;
            out.push_str(&digits[..point]);
            out.push('.');
            out.push_str(&digits[point..]);
        } else {
            out.push_str("0.");
            for _ in 0..(-point) {
                out.push('0');
            }
            out.push_str(&digits);
        }
    }

    out
}
