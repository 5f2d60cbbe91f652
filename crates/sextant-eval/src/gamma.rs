//! Gamma function via the Lanczos approximation.
//!
//! Used to extend the postfix factorial to non-integer operands:
//! `x! = Γ(x + 1)`. Double precision is ample here, since rendered results
//! carry at most 10 significant digits.

use std::f64::consts::PI;

/// Lanczos parameter g = 7 with 9 coefficients.
const G: f64 = 7.0;
const COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Computes Γ(x) for real x.
///
/// Returns a non-finite value at the poles (zero and the negative
/// integers); callers are expected to reject those.
#[must_use]
pub fn gamma(x: f64) -> f64 {
    if x <= 0.0 && x == x.floor() {
        return f64::NAN;
    }
    if x < 0.5 {
        // Reflection formula: Γ(x)·Γ(1−x) = π / sin(πx).
        PI / ((PI * x).sin() * gamma(1.0 - x))
    } else {
        let x = x - 1.0;
        let mut acc = COEFFICIENTS[0];
        for (i, &c) in COEFFICIENTS.iter().enumerate().skip(1) {
            acc += c / (x + i as f64);
        }
        let t = x + G + 0.5;
        (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-10 * b.abs().max(1.0)
    }

    #[test]
    fn matches_factorials_at_integers() {
        assert!(close(gamma(1.0), 1.0));
        assert!(close(gamma(5.0), 24.0));
        assert!(close(gamma(11.0), 3_628_800.0));
    }

    #[test]
    fn half_integer_values() {
        // Γ(1/2) = √π.
        assert!(close(gamma(0.5), PI.sqrt()));
        // Γ(4.5) = 3.5! ≈ 11.6317283966...
        assert!(close(gamma(4.5), 11.631_728_396_567_448));
    }

    #[test]
    fn poles_are_non_finite() {
        assert!(!gamma(0.0).is_finite());
        assert!(!gamma(-1.0).is_finite());
    }
}
