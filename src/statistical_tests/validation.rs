//! statistical_tests::validation — common input checks for test routines.
//!
//! Every public test constructor calls [`validate_series`] before touching
//! the data so that length and finiteness are enforced in one place.
use crate::statistical_tests::errors::{TestError, TestResult};

/// Validate a test input series.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Observations handed to a test.
/// - `min_len`: `usize`
///   Smallest length for which the test is defined.
///
/// Errors
/// ------
/// - `TestError::InsufficientData` when `data.len() < min_len`.
/// - `TestError::InvalidData(value)` for the first non-finite element.
pub fn validate_series(data: &[f64], min_len: usize) -> TestResult<()> {
    if data.len() < min_len {
        return Err(TestError::InsufficientData { needed: min_len, got: data.len() });
    }

    for &value in data {
        if !value.is_finite() {
            return Err(TestError::InvalidData(value));
        }
    }

    Ok(())
}

/// Reject a statistic that evaluated to NaN or ±∞.
pub fn ensure_finite(stat: f64) -> TestResult<f64> {
    if stat.is_finite() { Ok(stat) } else { Err(TestError::NonFiniteStatistic(stat)) }
}
