//! statistical_tests::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the hypothesis tests
//! (ADF, KPSS, Ljung–Box, Jarque–Bera), together with a conversion layer
//! to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - [`TestError`] covers both input problems (too few observations,
//!   non-finite values) and numerical breakdowns (singular regressions,
//!   zero variance, non-finite statistics).
//! - Numerical failures raised in `inference` convert into [`TestError`]
//!   via `From`, so test bodies can use `?` throughout.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `TestError` never aborts a report: the report layer maps it to an
//!   absent field and logs it. Callers using the tests directly receive
//!   the error as-is.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` messages embed their payloads
//!   and that inference errors map onto the intended variants.
use crate::inference::errors::InferenceError;
use thiserror::Error;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TestResult<T> = Result<T, TestError>;

/// TestError — failure conditions for statistical tests.
///
/// Variants
/// --------
/// - `InsufficientData { needed, got }`
///   The series is shorter than the test's minimum length.
/// - `InvalidData(value)`
///   A non-finite element reached a test routine.
/// - `SingularDesign`
///   The auxiliary regression could not be solved.
/// - `ZeroVariance`
///   The statistic divides by a variance estimate that is zero.
/// - `NonFiniteStatistic(value)`
///   The statistic evaluated to NaN or ±∞.
/// - `Distribution(msg)`
///   A reference distribution could not be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    // ---- Input validation ----
    #[error("Test Error: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Test Error: invalid data value {0}; must be a finite number")]
    InvalidData(f64),

    // ---- Numerical ----
    #[error("Test Error: auxiliary regression is singular")]
    SingularDesign,

    #[error("Test Error: series has zero variance")]
    ZeroVariance,

    #[error("Test Error: statistic is not finite ({0})")]
    NonFiniteStatistic(f64),

    #[error("Test Error: reference distribution unavailable: {0}")]
    Distribution(String),
}

impl From<InferenceError> for TestError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::SingularDesign { .. } => TestError::SingularDesign,
            InferenceError::DegenerateVariance { .. } => TestError::ZeroVariance,
            InferenceError::InsufficientObservations { nobs, regressors } => {
                TestError::InsufficientData { needed: regressors + 1, got: nobs }
            }
            InferenceError::ShapeMismatch { rows, len } => {
                TestError::InsufficientData { needed: rows, got: len }
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TestError> for PyErr {
    fn from(err: TestError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding.
    // - Mapping from `InferenceError`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Messages must carry the offending numbers for log readability.
    fn display_embeds_payload() {
        let msg = TestError::InsufficientData { needed: 10, got: 3 }.to_string();
        assert!(msg.contains("10") && msg.contains('3'));
        assert!(TestError::NonFiniteStatistic(f64::NAN).to_string().contains("NaN"));
    }

    #[test]
    // Purpose
    // -------
    // Singular regressions and degenerate variances keep their meaning.
    fn inference_errors_map_onto_test_errors() {
        assert_eq!(
            TestError::from(InferenceError::SingularDesign { ratio: 0.0 }),
            TestError::SingularDesign
        );
        assert_eq!(
            TestError::from(InferenceError::DegenerateVariance { variance: 0.0 }),
            TestError::ZeroVariance
        );
        assert_eq!(
            TestError::from(InferenceError::InsufficientObservations { nobs: 2, regressors: 3 }),
            TestError::InsufficientData { needed: 4, got: 2 }
        );
    }
}
