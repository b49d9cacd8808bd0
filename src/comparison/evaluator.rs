//! Comparison evaluator

use crate::comparison::ast::{Bound, CompareOp, Comparison};
use crate::value::{floats_equal, FlexibleValue};

/// Evaluate a comparison against an input value
pub fn check(comparison: &Comparison, input: &FlexibleValue) -> bool {
    match comparison {
        Comparison::Single { op, reference } => check_single(*op, reference, input),
        Comparison::Range { min, max } => check_range(min, max, input),
    }
}

/// Float comparison shared by ranges and mixed numeric operands.
///
/// Equality uses the absolute tolerance; ordering is plain float ordering.
#[inline]
pub fn fast_compare(op: CompareOp, a: f32, b: f32) -> bool {
    match op {
        CompareOp::Equal => floats_equal(a, b),
        CompareOp::NotEqual => !floats_equal(a, b),
        CompareOp::Less => a < b,
        CompareOp::LessEqual => a <= b,
        CompareOp::Greater => a > b,
        CompareOp::GreaterEqual => a >= b,
        CompareOp::ModuloEqual => floats_equal((a / b).floor(), b),
        CompareOp::RemainderEqual => floats_equal(a % b, b),
    }
}

fn check_range(min: &Bound, max: &Bound, input: &FlexibleValue) -> bool {
    if !input.is_valid() {
        return false;
    }

    let value = input.as_float();
    fast_compare(min.op, value, min.value.as_float())
        && fast_compare(max.op, value, max.value.as_float())
}

fn check_single(op: CompareOp, reference: &FlexibleValue, input: &FlexibleValue) -> bool {
    match (input, reference) {
        (FlexibleValue::None, _) | (_, FlexibleValue::None) => false,

        (FlexibleValue::Integer(a), FlexibleValue::Integer(b)) => compare_integers(op, *a, *b),

        // Mixed integer/float operands widen to float
        (a, b) if a.is_number() && b.is_number() => fast_compare(op, a.as_float(), b.as_float()),

        (FlexibleValue::String(a), FlexibleValue::String(b)) => match op {
            CompareOp::Equal => eq_ignore_case(a, b),
            CompareOp::NotEqual => !eq_ignore_case(a, b),
            _ => false,
        },

        (FlexibleValue::Boolean(a), FlexibleValue::Boolean(b)) => match op {
            CompareOp::Equal => a == b,
            CompareOp::NotEqual => a != b,
            _ => false,
        },

        // Default: false for unsupported combinations
        _ => false,
    }
}

/// Exact integer comparison; quotient and remainder are compared to the
/// reference itself, and a zero reference never matches
fn compare_integers(op: CompareOp, a: i32, b: i32) -> bool {
    match op {
        CompareOp::Equal => a == b,
        CompareOp::NotEqual => a != b,
        CompareOp::Less => a < b,
        CompareOp::LessEqual => a <= b,
        CompareOp::Greater => a > b,
        CompareOp::GreaterEqual => a >= b,
        CompareOp::ModuloEqual => a.checked_div(b) == Some(b),
        CompareOp::RemainderEqual => a.checked_rem(b) == Some(b),
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl Comparison {
    /// Evaluate this comparison against an input value
    #[inline]
    pub fn check(&self, input: &FlexibleValue) -> bool {
        check(self, input)
    }
}
