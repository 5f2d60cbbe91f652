//! Property-based tests for evaluation and rendering.

use proptest::prelude::*;

use crate::evaluate;

// Strategy for generating small integer operands
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero divisors
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

proptest! {
    #[test]
    fn addition_round_trips(a in small_int(), b in small_int()) {
        let rendered = evaluate(&format!("{a}+{b}")).unwrap();
        prop_assert_eq!(rendered.parse::<i64>().unwrap(), a + b);
    }

    #[test]
    fn subtraction_round_trips(a in small_int(), b in small_int()) {
        let rendered = evaluate(&format!("{a}-({b})")).unwrap();
        prop_assert_eq!(rendered.parse::<i64>().unwrap(), a - b);
    }

    #[test]
    fn multiplication_round_trips(a in small_int(), b in small_int()) {
        let rendered = evaluate(&format!("{a}*({b})")).unwrap();
        prop_assert_eq!(rendered.parse::<i64>().unwrap(), a * b);
    }

    #[test]
    fn division_matches_within_display_precision(a in small_int(), b in non_zero_int()) {
        let rendered = evaluate(&format!("{a}/({b})")).unwrap();
        let value: f64 = rendered.parse().unwrap();
        let expected = a as f64 / b as f64;
        let tolerance = expected.abs().max(1.0) * 1e-9;
        prop_assert!((value - expected).abs() <= tolerance);
    }

    #[test]
    fn integer_literals_render_verbatim(a in small_int()) {
        let rendered = evaluate(&a.to_string()).unwrap();
        prop_assert_eq!(rendered, a.to_string());
    }

    #[test]
    fn whitespace_is_insignificant(a in small_int(), b in small_int()) {
        let tight = evaluate(&format!("{a}+{b}")).unwrap();
        let spaced = evaluate(&format!(" {a} + {b} ")).unwrap();
        prop_assert_eq!(tight, spaced);
    }
}
