//! Flexible value module
//!
//! A tagged value that unifies integers, floats, booleans, strings and an
//! "absent" marker, with total conversions between them.

mod flexible;

#[cfg(test)]
mod property_tests;

pub use flexible::*;
