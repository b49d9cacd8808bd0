//! Comparison expression model

use crate::error::{CompareError, Result};
use crate::value::FlexibleValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Less than (<)
    Less,
    /// Less than or equal (<=)
    LessEqual,
    /// Greater than (>)
    Greater,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Quotient equals the reference (%=)
    ModuloEqual,
    /// Remainder equals the reference (/=)
    RemainderEqual,
}

impl CompareOp {
    /// Operators in the order they are matched against expression text.
    /// Two-character symbols sharing a first character come first.
    pub const ALL: [CompareOp; 8] = [
        CompareOp::LessEqual,
        CompareOp::GreaterEqual,
        CompareOp::Less,
        CompareOp::Greater,
        CompareOp::Equal,
        CompareOp::NotEqual,
        CompareOp::ModuloEqual,
        CompareOp::RemainderEqual,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Less => "<",
            CompareOp::LessEqual => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::ModuloEqual => "%=",
            CompareOp::RemainderEqual => "/=",
        }
    }

    /// Operator with its operands swapped, so `2 <= x` reads as `x >= 2`.
    /// Operators without a mirror image are returned unchanged.
    pub fn flipped(self) -> Self {
        match self {
            CompareOp::Less => CompareOp::Greater,
            CompareOp::LessEqual => CompareOp::GreaterEqual,
            CompareOp::Greater => CompareOp::Less,
            CompareOp::GreaterEqual => CompareOp::LessEqual,
            other => other,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        let symbol = s.trim();
        CompareOp::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| CompareError::UnknownOperator(symbol.to_string()))
    }
}

/// One side of a range comparison, read as `input <op> value`
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub op: CompareOp,
    pub value: FlexibleValue,
}

/// A parsed comparison expression.
///
/// Built with [`Comparison::parse`]; the default is an equality check
/// against an absent reference, which matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Comparison {
    /// Single operator against one reference, like ">=3"
    Single {
        op: CompareOp,
        reference: FlexibleValue,
    },
    /// Two bounds that must both hold, like "2<=x<10"
    Range { min: Bound, max: Bound },
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::Single {
            op: CompareOp::Equal,
            reference: FlexibleValue::None,
        }
    }
}

impl Comparison {
    #[inline]
    pub fn is_range(&self) -> bool {
        matches!(self, Comparison::Range { .. })
    }

    /// Operator of a single comparison
    pub fn op(&self) -> Option<CompareOp> {
        match self {
            Comparison::Single { op, .. } => Some(*op),
            Comparison::Range { .. } => None,
        }
    }

    /// Reference value of a single comparison
    pub fn reference(&self) -> Option<&FlexibleValue> {
        match self {
            Comparison::Single { reference, .. } => Some(reference),
            Comparison::Range { .. } => None,
        }
    }

    /// Lower and upper bound of a range comparison
    pub fn bounds(&self) -> Option<(&Bound, &Bound)> {
        match self {
            Comparison::Range { min, max } => Some((min, max)),
            Comparison::Single { .. } => None,
        }
    }
}

impl Comparison {
    /// Render as expression text that parses back to the same comparison.
    ///
    /// Unlike `Display`, floats keep full precision and whole floats keep
    /// their decimal point, so the reparsed reference has the same kind.
    pub fn to_expression(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_expression(&mut out, true);
        out
    }

    fn write_expression(&self, out: &mut impl fmt::Write, exact: bool) -> fmt::Result {
        match self {
            Comparison::Single { op, reference } => {
                write!(out, "{}{}", op, Rendered::new(reference, exact))
            }
            Comparison::Range { min, max } => write!(
                out,
                "{}{}x{}{}",
                Rendered::new(&min.value, exact),
                min.op.flipped(),
                max.op,
                Rendered::new(&max.value, exact)
            ),
        }
    }
}

/// Value rendering for expressions; `exact` switches floats to their
/// shortest round-tripping form
struct Rendered<'a> {
    value: &'a FlexibleValue,
    exact: bool,
}

impl<'a> Rendered<'a> {
    fn new(value: &'a FlexibleValue, exact: bool) -> Self {
        Self { value, exact }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            FlexibleValue::Float(v) if self.exact => write!(f, "{:?}", v),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_expression(f, false)
    }
}

impl From<Comparison> for String {
    fn from(comparison: Comparison) -> String {
        comparison.to_expression()
    }
}
