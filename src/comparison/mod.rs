//! Comparison expression parsing and evaluation module
//!
//! This module turns short rule strings like ">=3", "!=true" or "2<=x<10"
//! into reusable predicates and evaluates them against a FlexibleValue.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;

#[cfg(test)]
mod property_tests;

pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;
