//! series::validation — shared input guards for raw price data.
//!
//! Purpose
//! -------
//! Centralize the checks applied to caller-supplied price observations
//! before any derived column is built: non-emptiness, finiteness and
//! strict positivity of prices, and strictly increasing dates. Keeping
//! them in one place gives every entry point (`PriceSeries::new`, the
//! CSV loader, Python bindings) identical error semantics.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validation stops at the first offending element and reports its
//!   0-based index.
//! - Price checks run before date checks so that a bad price is reported
//!   even when dates are also out of order.
//!
//! Testing notes
//! -------------
//! - Unit tests cover each error branch and the success path.
use crate::series::errors::{SeriesError, SeriesResult};
use chrono::NaiveDate;

/// Validate parallel date and price slices for series construction.
///
/// Parameters
/// ----------
/// - `dates`: `&[NaiveDate]`
///   Observation dates; must be strictly increasing.
/// - `prices`: `&[f64]`
///   Observed prices; must be finite and > 0.
///
/// Returns
/// -------
/// `SeriesResult<()>`
///   - `Ok(())` when all constraints hold.
///   - `Err(SeriesError)` naming the first violated constraint.
///
/// Errors
/// ------
/// - `SeriesError::LengthMismatch` when the slices differ in length.
/// - `SeriesError::EmptySeries` when both slices are empty.
/// - `SeriesError::NonFinitePrice` / `SeriesError::NonPositivePrice` for
///   the first bad price.
/// - `SeriesError::NonIncreasingDates` for the first date that is not
///   strictly after its predecessor.
///
/// Panics
/// ------
/// - Never panics.
pub fn validate_observations(dates: &[NaiveDate], prices: &[f64]) -> SeriesResult<()> {
    if dates.len() != prices.len() {
        return Err(SeriesError::LengthMismatch { dates: dates.len(), prices: prices.len() });
    }
    if prices.is_empty() {
        return Err(SeriesError::EmptySeries);
    }

    for (index, &value) in prices.iter().enumerate() {
        if !value.is_finite() {
            return Err(SeriesError::NonFinitePrice { index, value });
        }
        if value <= 0.0 {
            return Err(SeriesError::NonPositivePrice { index, value });
        }
    }

    for (offset, pair) in dates.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(SeriesError::NonIncreasingDates {
                index: offset + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }

    Ok(())
}

/// Validate a list of rolling window sizes.
///
/// Returns `SeriesError::InvalidWindow` for the first zero window.
pub fn validate_windows(windows: &[usize]) -> SeriesResult<()> {
    match windows.iter().find(|&&w| w == 0) {
        Some(&window) => Err(SeriesError::InvalidWindow { window }),
        None => Ok(()),
    }
}
