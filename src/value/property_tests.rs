//! Property tests for the flexible value module

use proptest::prelude::*;

use crate::value::{FlexibleValue, ValueKind};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Floats with one to three decimals that are not whole numbers
fn fractional_float_strategy() -> impl Strategy<Value = f32> {
    (-100_000..=100_000i32)
        .prop_filter("must not be whole", |milli| milli % 1000 != 0)
        .prop_map(|milli| milli as f32 / 1000.0)
}

/// Arbitrary values of every kind
fn value_strategy() -> impl Strategy<Value = FlexibleValue> {
    prop_oneof![
        Just(FlexibleValue::None),
        any::<i32>().prop_map(FlexibleValue::Integer),
        (-1.0e6f32..1.0e6f32).prop_map(FlexibleValue::Float),
        any::<bool>().prop_map(FlexibleValue::Boolean),
        "[a-zA-Z ]{0,12}".prop_map(FlexibleValue::String),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Rendered integers parse back to the same integer
    #[test]
    fn prop_integer_round_trip(i in any::<i32>()) {
        let value = FlexibleValue::Integer(i);
        let reparsed = FlexibleValue::parse(&value.to_string());
        prop_assert!(reparsed.equals_to(&value), "{} -> {:?}", value, reparsed);
    }

    /// Rendered fractional floats parse back within tolerance
    #[test]
    fn prop_float_round_trip(f in fractional_float_strategy()) {
        let value = FlexibleValue::Float(f);
        let reparsed = FlexibleValue::parse(&value.to_string());
        prop_assert_eq!(reparsed.kind(), ValueKind::Float);
        prop_assert!(reparsed.equals_to(&value), "{} -> {:?}", value, reparsed);
    }

    /// Rendered booleans parse back to the same boolean
    #[test]
    fn prop_boolean_round_trip(b in any::<bool>()) {
        let value = FlexibleValue::Boolean(b);
        prop_assert!(FlexibleValue::parse(&value.to_string()).equals_to(&value));
    }

    /// Parsing is total and never produces an absent value
    #[test]
    fn prop_parse_is_total(text in "\\PC{0,24}") {
        prop_assert!(FlexibleValue::parse(&text).is_valid());
    }

    /// Equality is symmetric and never crosses kinds
    #[test]
    fn prop_equality_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(a.equals_to(&b), b.equals_to(&a));
        if a.kind() != b.kind() {
            prop_assert!(!a.equals_to(&b));
        }
    }

    /// Integer accessors are consistent with each other
    #[test]
    fn prop_integer_accessors(i in any::<i32>()) {
        let value = FlexibleValue::Integer(i);
        prop_assert_eq!(value.as_int(), i);
        prop_assert_eq!(value.as_float(), i as f32);
        prop_assert_eq!(value.as_bool(), i != 0);
    }
}
