//! Flexible Compare - value-agnostic comparison expressions
//!
//! This crate evaluates short rule strings such as `>=3`, `!=true`,
//! `2<=x<10` or `%=4` against values whose type is only known at runtime.
//! Expressions are parsed once into a [`Comparison`] and then checked
//! against any number of [`FlexibleValue`] inputs.
//!
//! ```
//! use flexible_compare::{Comparison, FlexibleValue};
//!
//! let rule = Comparison::parse("2<=x<10");
//! assert!(rule.check(&FlexibleValue::from(5)));
//! assert!(!rule.check(&FlexibleValue::parse("10")));
//! ```
//!
//! With the `python` feature the crate also builds a PyO3 extension module.

pub mod comparison;
pub mod error;
pub mod value;

#[cfg(feature = "python")]
mod python;

pub use crate::comparison::{Bound, CompareOp, Comparison};
pub use crate::error::CompareError;
pub use crate::value::{FlexibleValue, ValueKind, FLOAT_TOLERANCE};
