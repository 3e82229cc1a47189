//! events::impact — before/after price impact around an event date.
//!
//! Purpose
//! -------
//! Compare prices in a calendar window before an event with prices in a
//! window after it.
//!
//! Key behaviors
//! -------------
//! - Before window: dates in `[event − before_days, event)`.
//! - After window: dates in `(event, event + after_days]`.
//! - Observations on the event date itself belong to neither window.
//! - If either window is empty the impact is not computable and the result
//!   is `None`; no partial report is ever produced.
//!
//! Conventions
//! -----------
//! - Window sizes are calendar days, not observation counts.
//! - `volatility_before` / `volatility_after` are population standard
//!   deviations (`n` denominator) of the window prices.
use crate::analysis::descriptive::{max, mean, min, population_std};
use crate::series::PriceSeries;
use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;
use std::ops::Range;

/// Price impact around one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactReport {
    pub event_date: NaiveDate,
    pub price_before: f64,
    pub price_after: f64,
    pub price_change: f64,
    pub percent_change: f64,
    pub volatility_before: f64,
    pub volatility_after: f64,
    pub max_price: f64,
    pub min_price: f64,
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let fallback = if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta)).unwrap_or(fallback)
}

/// Index ranges of the before and after windows of `event_date`.
///
/// Window ends beyond the calendar range saturate at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn event_windows(
    series: &PriceSeries, event_date: NaiveDate, before_days: i64, after_days: i64,
) -> (Range<usize>, Range<usize>) {
    let before = series.index_range(shift(event_date, before_days.saturating_neg()), event_date);
    let after = series.index_range(shift(event_date, 1), shift(event_date, after_days.saturating_add(1)));
    (before, after)
}

/// calculate_event_impact — before/after price comparison.
///
/// Parameters
/// ----------
/// - `series`: validated price history.
/// - `event_date`: date of the event.
/// - `before_days`, `after_days`: calendar window sizes (30/30 by default
///   upstream).
///
/// Returns
/// -------
/// `Option<ImpactReport>`; `None` when either window has no observations.
pub fn calculate_event_impact(
    series: &PriceSeries, event_date: NaiveDate, before_days: i64, after_days: i64,
) -> Option<ImpactReport> {
    let (before_idx, after_idx) = event_windows(series, event_date, before_days, after_days);
    let prices = series.prices().as_slice()?;
    let before = &prices[before_idx];
    let after = &prices[after_idx];

    let price_before = mean(before)?;
    let price_after = mean(after)?;
    let price_change = price_after - price_before;
    Some(ImpactReport {
        event_date,
        price_before,
        price_after,
        price_change,
        percent_change: price_change / price_before * 100.0,
        volatility_before: population_std(before)?,
        volatility_after: population_std(after)?,
        max_price: max(after)?,
        min_price: min(after)?,
    })
}
