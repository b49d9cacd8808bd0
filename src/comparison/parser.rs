//! Comparison expression parser

use crate::comparison::ast::{Bound, CompareOp, Comparison};
use crate::value::FlexibleValue;
use std::convert::Infallible;
use std::str::FromStr;

/// Parse a comparison expression.
///
/// Accepted forms, tried in order:
/// - range: `"2<=x<10"`, `"0<x"`-style bounds on both sides of an `x`
/// - operator prefix: `"<=3"`, `">=3"`, `"<3"`, `">3"`, `"==3"`, `"!=3"`,
///   `"%=4"`, `"/=4"`
/// - negation: `"!true"`
/// - bare value: `"3"`, meaning equality
///
/// Parsing never fails. Blank input compares against an absent reference.
pub fn parse(expr: &str) -> Comparison {
    let expr = expr.trim();
    if expr.is_empty() {
        return Comparison::default();
    }

    if let Some(range) = parse_range(expr) {
        return range;
    }

    parse_single(expr)
}

fn is_range_separator(c: char) -> bool {
    c == 'x' || c == 'X'
}

/// Split on a single `x` and read both sides as numeric bounds
fn parse_range(expr: &str) -> Option<Comparison> {
    if !expr.contains(is_range_separator) {
        return None;
    }

    let mut parts = expr.split(is_range_separator);
    let (left, right) = match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => (left, right),
        _ => {
            tracing::trace!(expression = expr, "more than one range separator");
            return None;
        }
    };

    match (parse_lower_bound(left), parse_upper_bound(right)) {
        (Some(min), Some(max)) => Some(Comparison::Range { min, max }),
        _ => {
            tracing::trace!(expression = expr, "range bounds are not numeric");
            None
        }
    }
}

/// Left side of a range, operator trailing: `"2<="` means `x >= 2`
fn parse_lower_bound(part: &str) -> Option<Bound> {
    let part = part.trim();
    let (value_text, op) = CompareOp::ALL
        .into_iter()
        .find_map(|op| part.strip_suffix(op.symbol()).map(|rest| (rest, op)))
        .unwrap_or((part, CompareOp::Equal));

    numeric_bound(value_text, op.flipped())
}

/// Right side of a range, operator leading: `"<10"` means `x < 10`
fn parse_upper_bound(part: &str) -> Option<Bound> {
    let part = part.trim();
    let (value_text, op) = CompareOp::ALL
        .into_iter()
        .find_map(|op| part.strip_prefix(op.symbol()).map(|rest| (rest, op)))
        .unwrap_or((part, CompareOp::Equal));

    numeric_bound(value_text, op)
}

fn numeric_bound(text: &str, op: CompareOp) -> Option<Bound> {
    let value = FlexibleValue::parse(text);
    value.is_number().then_some(Bound { op, value })
}

fn parse_single(expr: &str) -> Comparison {
    for op in CompareOp::ALL {
        if let Some(rest) = expr.strip_prefix(op.symbol()) {
            return Comparison::Single {
                op,
                reference: FlexibleValue::parse(rest),
            };
        }
    }

    // "!=" was matched above, so a leading '!' here is plain negation
    if let Some(rest) = expr.strip_prefix('!').filter(|rest| !rest.is_empty()) {
        return Comparison::Single {
            op: CompareOp::NotEqual,
            reference: FlexibleValue::parse(rest),
        };
    }

    Comparison::Single {
        op: CompareOp::Equal,
        reference: FlexibleValue::parse(expr),
    }
}

impl Comparison {
    /// Parse a comparison expression, see [`parse`]
    #[inline]
    pub fn parse(expr: &str) -> Self {
        parse(expr)
    }
}

impl FromStr for Comparison {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for Comparison {
    fn from(expr: &str) -> Self {
        parse(expr)
    }
}

impl From<String> for Comparison {
    fn from(expr: String) -> Self {
        parse(&expr)
    }
}
