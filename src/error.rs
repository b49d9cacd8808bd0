//! Error types for the flexible comparison crate

use thiserror::Error;

/// Errors raised at the strict edges of the crate.
///
/// Parsing and evaluating expressions never fails; these only come from
/// explicit operator lookups and from foreign values that have no
/// `FlexibleValue` counterpart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unsupported value type: {0}")]
    UnsupportedValue(String),
}

#[cfg(feature = "python")]
impl From<CompareError> for pyo3::PyErr {
    fn from(err: CompareError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyTypeError, PyValueError};

        match err {
            CompareError::UnknownOperator(symbol) => {
                PyValueError::new_err(format!("Unknown operator: {}", symbol))
            }
            CompareError::UnsupportedValue(type_name) => {
                PyTypeError::new_err(format!("Unsupported value type: {}", type_name))
            }
        }
    }
}

/// Result type alias for the flexible comparison crate
pub type Result<T> = std::result::Result<T, CompareError>;
