//! series — validated price histories and their derived columns.
//!
//! Purpose
//! -------
//! Own the entry point for raw price data: validation into a
//! [`PriceSeries`], construction of [`DerivedSeries`] (log prices, returns,
//! rolling moving averages and annualized volatility), inclusive
//! [`DateRange`] filtering, and calendar resampling for presentation.
//!
//! Key behaviors
//! -------------
//! - Reject malformed input up front ([`SeriesError`]); no analyzer ever
//!   sees unsorted dates or non-positive prices.
//! - Represent "not enough history" as `None` entries in rolling columns,
//!   never as zeros or shortened windows.
//! - Compute every rolling column in one forward pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - Columns in [`DerivedSeries`] are index-aligned with the source
//!   [`PriceSeries`].
//! - Nothing in this subtree mutates caller-owned data.
//!
//! Downstream usage
//! ----------------
//! - The analyzers in `analysis` and the event tools in `events` take
//!   `&PriceSeries` / `&DerivedSeries` and never rebuild columns.
//!
//! Testing notes
//! -------------
//! - Each file carries unit tests for its own invariants; the end-to-end
//!   scenarios live in `tests/integration_analysis_pipeline.rs`.

pub mod data;
pub mod errors;
pub mod preprocess;
pub mod resample;
pub mod rolling;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{DateRange, PricePoint, PriceSeries};
pub use self::errors::{SeriesError, SeriesResult};
pub use self::preprocess::{DerivedSeries, TRADING_DAYS_PER_YEAR};
pub use self::resample::{Frequency, ResampledRow};
