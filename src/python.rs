//! Python bindings via PyO3

use crate::comparison::{self, Comparison};
use crate::error::CompareError;
use crate::value::FlexibleValue;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyInt, PyString};
use pyo3::IntoPyObjectExt;

// ============================================================================
// Value Conversion
// ============================================================================

/// Convert a Python object into a FlexibleValue
///
/// Enum members (including `IntEnum` and `StrEnum`) become their name;
/// `None`, `bool`, `int`, `float` and `str` map to their counterparts, with
/// ints that do not fit in 32 bits becoming floats. Anything else is
/// rejected.
fn value_from_py(obj: &Bound<'_, PyAny>) -> PyResult<FlexibleValue> {
    if obj.is_none() {
        return Ok(FlexibleValue::None);
    }

    // IntEnum members are also ints, so enums are matched by name first
    let enum_type = obj.py().import("enum")?.getattr("Enum")?;
    if obj.is_instance(&enum_type)? {
        return Ok(FlexibleValue::String(obj.getattr("name")?.extract::<String>()?));
    }

    // bool is a subclass of int
    if obj.is_instance_of::<PyBool>() {
        return Ok(FlexibleValue::Boolean(obj.extract::<bool>()?));
    }

    if obj.is_instance_of::<PyInt>() {
        return Ok(match obj.extract::<i64>() {
            Ok(i) => FlexibleValue::from(i),
            Err(_) => FlexibleValue::Float(obj.extract::<f64>()? as f32),
        });
    }

    if obj.is_instance_of::<PyFloat>() {
        return Ok(FlexibleValue::Float(obj.extract::<f64>()? as f32));
    }

    if obj.is_instance_of::<PyString>() {
        return Ok(FlexibleValue::String(obj.extract::<String>()?));
    }

    let type_name = obj.get_type().qualname()?.to_string();
    Err(CompareError::UnsupportedValue(type_name).into())
}

/// Convert a FlexibleValue into the matching Python object
fn value_into_py(py: Python<'_>, value: &FlexibleValue) -> PyResult<Py<PyAny>> {
    match value {
        FlexibleValue::None => Ok(py.None()),
        FlexibleValue::Integer(i) => (*i).into_py_any(py),
        FlexibleValue::Float(f) => (*f).into_py_any(py),
        FlexibleValue::Boolean(b) => (*b).into_py_any(py),
        FlexibleValue::String(s) => s.as_str().into_py_any(py),
    }
}

// ============================================================================
// Python Classes
// ============================================================================

/// A parsed comparison expression
#[pyclass(name = "Comparison", module = "flexible_compare", frozen)]
pub struct PyComparison {
    inner: Comparison,
}

#[pymethods]
impl PyComparison {
    /// Parse an expression such as ">=3", "!=true" or "2<=x<10"
    #[new]
    #[pyo3(signature = (expr=None))]
    fn new(expr: Option<String>) -> Self {
        let inner = expr.as_deref().map(Comparison::parse).unwrap_or_default();
        Self { inner }
    }

    /// Evaluate the comparison against a value
    fn check(&self, value: &Bound<'_, PyAny>) -> PyResult<bool> {
        Ok(self.inner.check(&value_from_py(value)?))
    }

    #[getter]
    fn is_range(&self) -> bool {
        self.inner.is_range()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Comparison('{}')", self.inner)
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Infer a value from text: int, float, bool or str
#[pyfunction]
fn parse_value(py: Python<'_>, text: &str) -> PyResult<Py<PyAny>> {
    value_into_py(py, &FlexibleValue::parse(text))
}

/// Check an expression against a value, caching the parsed expression
#[pyfunction]
fn check(expr: &str, value: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(comparison::check_condition(expr, &value_from_py(value)?))
}

/// Drop every cached expression
#[pyfunction]
fn clear_cache() {
    comparison::clear_cache();
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn flexible_compare(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_value, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add_function(wrap_pyfunction!(clear_cache, m)?)?;
    m.add_class::<PyComparison>()?;
    Ok(())
}
