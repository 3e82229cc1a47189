//! Validated price-series containers.
//!
//! Purpose
//! -------
//! Provide [`PriceSeries`], the single owned representation of a daily
//! price history used throughout the crate, together with the small value
//! types around it ([`PricePoint`], [`DateRange`]).
//!
//! Key behaviors
//! -------------
//! - [`PriceSeries::new`] enforces non-emptiness, finite and strictly
//!   positive prices, and strictly increasing dates.
//! - Date lookups use binary search over the sorted dates, so window
//!   queries (event impact, range filters) are O(log n) to locate.
//! - [`DateRange::new`] is the only way to build a range and rejects
//!   `start > end` uniformly for every filter in the crate.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dates.len() == prices.len() > 0`.
//! - `dates` strictly increasing; all prices finite and > 0.
//! - A `PriceSeries` is never mutated after construction; filters build
//!   new series.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction, binary-search window bounds, and
//!   range filtering including the empty-result case.
use crate::series::{
    errors::{SeriesError, SeriesResult},
    validation::validate_observations,
};
use chrono::{Datelike, NaiveDate};
use ndarray::{Array1, s};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single (date, price) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// `PriceSeries` — validated daily price history.
///
/// Fields
/// ------
/// - `dates`: `Vec<NaiveDate>`
///   Strictly increasing observation dates.
/// - `prices`: `Array1<f64>`
///   Prices aligned with `dates`; finite and strictly positive.
///
/// Performance
/// -----------
/// - Validation is a single O(n) scan. Accessors borrow; nothing is
///   recomputed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    prices: Array1<f64>,
}

impl PriceSeries {
    /// Construct a validated series from parallel date and price vectors.
    ///
    /// Errors
    /// ------
    /// - Any [`SeriesError`] produced by
    ///   [`validate_observations`](crate::series::validation::validate_observations).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use commodity_timeseries::series::PriceSeries;
    /// let d0 = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let d1 = d0.succ_opt().unwrap();
    /// let series = PriceSeries::new(vec![d0, d1], vec![50.0, 51.0]).unwrap();
    /// assert_eq!(series.len(), 2);
    /// ```
    pub fn new(dates: Vec<NaiveDate>, prices: Vec<f64>) -> SeriesResult<Self> {
        validate_observations(&dates, &prices)?;
        Ok(PriceSeries { dates, prices: Array1::from(prices) })
    }

    /// Construct a validated series from (date, price) points.
    pub fn from_points(points: &[PricePoint]) -> SeriesResult<Self> {
        let (dates, prices) = points.iter().map(|p| (p.date, p.price)).unzip();
        Self::new(dates, prices)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false` for a constructed series; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn prices(&self) -> &Array1<f64> {
        &self.prices
    }

    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn last_price(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Full span of the series as a [`DateRange`].
    pub fn date_range(&self) -> DateRange {
        DateRange { start: self.first_date(), end: self.last_date() }
    }

    /// Calendar year of each observation.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.dates.iter().map(|d| d.year())
    }

    pub fn points(&self) -> impl Iterator<Item = PricePoint> + '_ {
        self.dates.iter().zip(self.prices.iter()).map(|(&date, &price)| PricePoint { date, price })
    }

    /// Index range of observations with `lower <= date < upper`.
    ///
    /// Notes
    /// -----
    /// - Bounds are located by binary search; the returned range may be
    ///   empty but is always within `0..len`.
    pub fn index_range(&self, lower: NaiveDate, upper: NaiveDate) -> Range<usize> {
        let start = self.dates.partition_point(|d| *d < lower);
        let end = self.dates.partition_point(|d| *d < upper).max(start);
        start..end
    }

    /// Index range of observations inside an inclusive [`DateRange`].
    pub fn range_indices(&self, range: &DateRange) -> Range<usize> {
        let start = self.dates.partition_point(|d| *d < range.start);
        let end = self.dates.partition_point(|d| *d <= range.end).max(start);
        start..end
    }

    /// Sub-series restricted to an inclusive date range.
    ///
    /// Returns
    /// -------
    /// - `Some(PriceSeries)` with the matching observations.
    /// - `None` when no observation falls inside the range.
    pub fn filter_by_date_range(&self, range: &DateRange) -> Option<PriceSeries> {
        let idx = self.range_indices(range);
        if idx.is_empty() {
            return None;
        }
        Some(PriceSeries {
            dates: self.dates[idx.clone()].to_vec(),
            prices: self.prices.slice(s![idx.start..idx.end]).to_owned(),
        })
    }
}

/// `DateRange` — inclusive calendar range `[start, end]`.
///
/// Invariants
/// ----------
/// - `start <= end`; enforced by [`DateRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build an inclusive range.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::InvertedDateRange` when `start > end`. This is the
    ///   single rule for inverted ranges across the crate.
    pub fn new(start: NaiveDate, end: NaiveDate) -> SeriesResult<Self> {
        if start > end {
            return Err(SeriesError::InvertedDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Build a range where either bound may be open; open bounds fall back
    /// to `default`.
    pub fn with_defaults(
        start: Option<NaiveDate>, end: Option<NaiveDate>, default: DateRange,
    ) -> SeriesResult<Self> {
        Self::new(start.unwrap_or(default.start), end.unwrap_or(default.end))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
