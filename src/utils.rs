//! utils — conversion helpers for the Python boundary.
//!
//! Only compiled with the `python-bindings` feature. Each helper turns a
//! loosely typed Python argument into the strict Rust type the core
//! expects, or a `PyErr` naming what was wrong.
#[cfg(feature = "python-bindings")]
use chrono::NaiveDate;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::loader::parse_date;

/// Borrow a contiguous `float64` view of a numpy array, a pandas Series, or
/// any sequence of floats (copied once in the last case).
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        if arr.as_slice().is_ok() {
            return Ok(arr);
        }
    }
    if let Ok(obj) = raw.call_method("to_numpy", (false,), None) {
        if let Ok(arr) = obj.extract::<PyReadonlyArray1<f64>>() {
            if arr.as_slice().is_ok() {
                return Ok(arr);
            }
        }
    }
    let values: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("prices: expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(values.into_pyarray(py).readonly())
}

/// Parse date strings in any accepted layout; the first failure is reported
/// with its position.
#[cfg(feature = "python-bindings")]
pub fn parse_date_strings(raw: &[String]) -> PyResult<Vec<NaiveDate>> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            parse_date(s).ok_or_else(|| PyValueError::new_err(format!("dates[{i}]: unparseable date {s:?}")))
        })
        .collect()
}
