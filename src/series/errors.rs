//! series::errors — validation errors for price series and derived columns.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used when raw price data enters
//! the crate and when derived columns (rolling windows, date ranges) are
//! configured. Every variant here is *fatal*: it means the input cannot be
//! analyzed at all, as opposed to "not computable" outcomes which are
//! modelled as `Option::None` by the analyzers.
//!
//! Conventions
//! -----------
//! - Indices in payloads are 0-based positions in the caller's input.
//! - Messages are phrased in terms of the violated constraint
//!   ("dates must be strictly increasing") rather than low-level details.
use chrono::NaiveDate;
use thiserror::Error;

pub type SeriesResult<T> = Result<T, SeriesError>;

/// SeriesError — fatal input conditions for price series construction.
///
/// Variants
/// --------
/// - `EmptySeries`
///   No observations were supplied.
/// - `NonFinitePrice { index, value }`
///   A price is NaN or ±∞.
/// - `NonPositivePrice { index, value }`
///   A price is ≤ 0, so its logarithm is undefined.
/// - `NonIncreasingDates { index, previous, current }`
///   The date at `index` is not strictly after the date at `index - 1`
///   (covers both duplicates and out-of-order input).
/// - `LengthMismatch { dates, prices }`
///   Parallel date/price inputs differ in length.
/// - `InvalidWindow { window }`
///   A rolling window of zero observations was requested.
/// - `InvertedDateRange { start, end }`
///   A date range with `start > end` was requested.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("Price series is empty; at least one observation is required.")]
    EmptySeries,

    #[error("Invalid price at index {index}: {value}. Must be a finite number.")]
    NonFinitePrice { index: usize, value: f64 },

    #[error("Invalid price at index {index}: {value}. Prices must be strictly positive.")]
    NonPositivePrice { index: usize, value: f64 },

    #[error(
        "Dates must be strictly increasing: index {index} has {current}, previous is {previous}."
    )]
    NonIncreasingDates { index: usize, previous: NaiveDate, current: NaiveDate },

    #[error("Length mismatch: {dates} dates but {prices} prices.")]
    LengthMismatch { dates: usize, prices: usize },

    #[error("Invalid rolling window {window}. Must be at least 1 observation.")]
    InvalidWindow { window: usize },

    #[error("Inverted date range: start {start} is after end {end}.")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}
