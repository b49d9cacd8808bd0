//! FlexibleValue definition, parsing and conversions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Absolute tolerance used for every float equality check
pub const FLOAT_TOLERANCE: f32 = 1e-5;

/// Placeholder rendered for an absent value
const NONE_TEXT: &str = "(none)";

/// Float equality within [`FLOAT_TOLERANCE`]
#[inline]
pub(crate) fn floats_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < FLOAT_TOLERANCE
}

/// Parse a finite float, rejecting `inf`, `nan` and overflowing literals
#[inline]
fn parse_float(text: &str) -> Option<f32> {
    text.parse::<f32>().ok().filter(|f| f.is_finite())
}

/// Kind tag of a [`FlexibleValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Integer,
    Float,
    Boolean,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::None => "none",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A value of runtime-determined type.
///
/// `None` marks an absent or invalid value and never takes part in a
/// successful comparison, not even against another `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexibleValue {
    #[default]
    None,
    Integer(i32),
    Float(f32),
    Boolean(bool),
    String(String),
}

impl FlexibleValue {
    /// Infer a value from text.
    ///
    /// The text is trimmed, then tried as an integer, a float and a
    /// case-insensitive `true`/`false`, in that order. Anything else is kept
    /// as a string. Blank text yields an empty string, not `None`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::String(String::new());
        }
        if let Ok(i) = text.parse::<i32>() {
            return Self::Integer(i);
        }
        if let Some(f) = parse_float(text) {
            return Self::Float(f);
        }
        if text.eq_ignore_ascii_case("true") {
            return Self::Boolean(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Self::Boolean(false);
        }
        Self::String(text.to_string())
    }

    /// Build a string value from anything displayable, e.g. an enum variant
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::String(value.to_string())
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::String(_) => ValueKind::String,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Integer view; floats truncate toward zero, unparsable text is `0`
    pub fn as_int(&self) -> i32 {
        match self {
            Self::Integer(i) => *i,
            Self::Boolean(b) => i32::from(*b),
            Self::Float(f) => *f as i32,
            Self::String(s) => s.trim().parse().unwrap_or(0),
            Self::None => 0,
        }
    }

    /// Float view; booleans and absent values are `0.0`
    pub fn as_float(&self) -> f32 {
        match self {
            Self::Float(f) => *f,
            Self::Integer(i) => *i as f32,
            Self::String(s) => parse_float(s.trim()).unwrap_or(0.0),
            Self::Boolean(_) | Self::None => 0.0,
        }
    }

    /// Truthiness; text is true unless blank, `"0"` or `"false"`
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::String(s) => {
                !s.trim().is_empty() && s != "0" && !s.eq_ignore_ascii_case("false")
            }
            Self::Float(_) | Self::None => false,
        }
    }

    /// Borrow the string payload, if this is a string value
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Strict value equality: same kind, floats within tolerance,
    /// strings case-sensitive. `None` equals nothing.
    pub fn equals_to(&self, other: &FlexibleValue) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => floats_equal(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for FlexibleValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals_to(other)
    }
}

impl fmt::Display for FlexibleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::String(s) => f.write_str(s),
            Self::None => f.write_str(NONE_TEXT),
        }
    }
}

/// Render with at most three decimals and no trailing zeros
fn format_float(value: f32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

impl FromStr for FlexibleValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<i32> for FlexibleValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

/// Wide integers that do not fit in `i32` become floats
impl From<i64> for FlexibleValue {
    fn from(value: i64) -> Self {
        i32::try_from(value).map_or(Self::Float(value as f32), Self::Integer)
    }
}

impl From<f32> for FlexibleValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FlexibleValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for FlexibleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FlexibleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<FlexibleValue>> From<Option<T>> for FlexibleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
