//! Property tests for the comparison module

use proptest::prelude::*;

use crate::comparison::ast::{CompareOp, Comparison};
use crate::comparison::cache::check_condition;
use crate::comparison::parser::parse;
use crate::value::{FlexibleValue, ValueKind};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate ordering and equality operators
fn comparison_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("<"),
        Just("<="),
        Just(">"),
        Just(">="),
        Just("=="),
        Just("!="),
    ]
}

/// Generate any operator symbol
fn any_operator_strategy() -> impl Strategy<Value = CompareOp> {
    proptest::sample::select(CompareOp::ALL.to_vec())
}

/// Generate words that cannot be read as numbers, booleans or ranges
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-wA-W]{1,10}".prop_filter("must not be a boolean", |w| {
        !w.eq_ignore_ascii_case("true") && !w.eq_ignore_ascii_case("false")
    })
}

/// Native integer semantics for an operator symbol
fn expected_integer(op: &str, a: i32, b: i32) -> bool {
    match op {
        "<" => a < b,
        "<=" => a <= b,
        ">" => a > b,
        ">=" => a >= b,
        "==" => a == b,
        "!=" => a != b,
        _ => unreachable!(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Integer comparisons agree with native integer operators
    #[test]
    fn prop_integer_operators(
        op in comparison_operator_strategy(),
        a in any::<i32>(),
        b in any::<i32>()
    ) {
        let comparison = parse(&format!("{}{}", op, b));
        prop_assert_eq!(
            comparison.check(&FlexibleValue::Integer(a)),
            expected_integer(op, a, b),
            "{}{} against {}", op, b, a
        );
    }

    /// Floats closer than the tolerance compare equal
    #[test]
    fn prop_float_tolerance(b in -1000.0f32..1000.0f32, delta in -4.0e-6f32..4.0e-6f32) {
        let comparison = Comparison::Single {
            op: CompareOp::Equal,
            reference: FlexibleValue::Float(b),
        };
        let a = b + delta;
        prop_assume!((a - b).abs() < 1e-5);
        prop_assert!(comparison.check(&FlexibleValue::Float(a)));
    }

    /// Ranges match exactly the values between their bounds
    #[test]
    fn prop_range_membership(
        low in -100..=100i32,
        width in 0..=100i32,
        v in -300..=300i32
    ) {
        let high = low + width;
        let comparison = parse(&format!("{}<=x<{}", low, high));
        prop_assert!(comparison.is_range());
        prop_assert_eq!(comparison.check(&FlexibleValue::Integer(v)), low <= v && v < high);
    }

    /// String equality ignores case in both directions
    #[test]
    fn prop_string_case_insensitive(word in word_strategy()) {
        let upper = FlexibleValue::from(word.to_uppercase());
        let lower = FlexibleValue::from(word.to_lowercase());

        let equal = parse(&format!("=={}", word));
        let not_equal = parse(&format!("!={}", word));

        prop_assert!(equal.check(&upper), "{} against {:?}", equal, upper);
        prop_assert!(equal.check(&lower), "{} against {:?}", equal, lower);
        prop_assert!(!not_equal.check(&upper), "{} against {:?}", not_equal, upper);
    }

    /// A blank expression matches nothing
    #[test]
    fn prop_blank_matches_nothing(spaces in " {0,4}", v in any::<i32>()) {
        prop_assert!(!parse(&spaces).check(&FlexibleValue::Integer(v)));
    }

    /// Rendered single comparisons re-parse to the same comparison
    #[test]
    fn prop_single_display_round_trip(op in any_operator_strategy(), b in any::<i32>()) {
        let comparison = Comparison::Single { op, reference: FlexibleValue::Integer(b) };
        prop_assert_eq!(parse(&comparison.to_string()), comparison);
    }

    /// Rendered ranges re-parse to the same range
    #[test]
    fn prop_range_display_round_trip(
        low in -100..=100i32,
        high in -100..=100i32,
        low_op in comparison_operator_strategy(),
        high_op in comparison_operator_strategy()
    ) {
        let expr = format!("{}{}x{}{}", low, low_op, high_op, high);
        let comparison = parse(&expr);
        prop_assert!(comparison.is_range(), "{} should be a range", expr);
        prop_assert_eq!(comparison.to_string(), expr);
    }

    /// Serialized comparisons restore with unchanged behaviour
    #[test]
    fn prop_serde_round_trip_preserves_check(
        op in any_operator_strategy(),
        b in -1000.0f32..1000.0f32,
        a in -1000.0f32..1000.0f32
    ) {
        let comparison = Comparison::Single { op, reference: FlexibleValue::Float(b) };
        let json = serde_json::to_string(&comparison).unwrap();
        let restored: Comparison = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.reference().map(FlexibleValue::kind), Some(ValueKind::Float));
        prop_assert_eq!(&restored, &comparison, "{}", json);
        let input = FlexibleValue::Float(a);
        prop_assert_eq!(restored.check(&input), comparison.check(&input), "{} against {}", json, a);
    }

    /// Cached evaluation agrees with direct evaluation
    #[test]
    fn prop_cached_matches_direct(
        op in comparison_operator_strategy(),
        b in -20..=20i32,
        a in -20..=20i32
    ) {
        let expr = format!("{}{}", op, b);
        let input = FlexibleValue::Integer(a);
        prop_assert_eq!(check_condition(&expr, &input), parse(&expr).check(&input));
    }
}
