//! analysis::trend — linear trend, calendar-year aggregates and MA summaries.
//!
//! Purpose
//! -------
//! Describe the long-run shape of the price path: an OLS line against the
//! 0-based observation index, per-year price statistics, and summaries of
//! each configured moving-average column.
//!
//! Key behaviors
//! -------------
//! - The slope p-value is two-sided from Student's t with `n − 2` degrees
//!   of freedom; a perfect fit gives `p ≈ 0`, a flat series `p = 1`.
//! - Years with a single observation report `std = None`.
//! - An MA window with no defined values is omitted from `rolling_stats`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are a validated `PriceSeries` and its `DerivedSeries`; nothing
//!   here can fail, only be absent.
use crate::analysis::descriptive::{SummaryStats, defined, max, mean, min, sample_std};
use crate::series::{DerivedSeries, PriceSeries};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::collections::BTreeMap;

const TINY: f64 = 1.0e-20;

/// OLS fit of price on observation index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub p_value: f64,
    pub std_error: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyStats {
    pub year: i32,
    #[serde(flatten)]
    pub stats: SummaryStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingWindowStats {
    pub window: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub linear_trend: Option<LinearTrend>,
    pub yearly_stats: Vec<YearlyStats>,
    pub rolling_stats: Vec<RollingWindowStats>,
}

/// Simple linear regression of `y` on `0..n`.
///
/// Returns `None` for fewer than three points.
pub fn linear_trend(y: &[f64]) -> Option<LinearTrend> {
    let n = y.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = mean(y)?;
    let (mut ssx, mut ssy, mut sxy) = (0.0, 0.0, 0.0);
    for (i, &yi) in y.iter().enumerate() {
        let dx = i as f64 - x_mean;
        let dy = yi - y_mean;
        ssx += dx * dx;
        ssy += dy * dy;
        sxy += dx * dy;
    }

    let slope = sxy / ssx;
    let intercept = y_mean - slope * x_mean;
    let r = if ssy == 0.0 { 0.0 } else { (sxy / (ssx * ssy).sqrt()).clamp(-1.0, 1.0) };
    let df = nf - 2.0;
    let t = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
    let p_value = StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |dist| 2.0 * dist.sf(t.abs()));
    let std_error = ((1.0 - r * r) * ssy / ssx / df).max(0.0).sqrt();

    Some(LinearTrend { slope, intercept, r_squared: r * r, p_value, std_error })
}

/// Group the defined values of a column by calendar year.
pub(crate) fn yearly_groups(dates: &[NaiveDate], values: &[Option<f64>]) -> BTreeMap<i32, Vec<f64>> {
    let mut groups: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for (date, value) in dates.iter().zip(values) {
        if let Some(v) = value {
            groups.entry(date.year()).or_default().push(*v);
        }
    }
    groups
}

/// Per-year price statistics in ascending year order.
pub fn yearly_stats(series: &PriceSeries) -> Vec<YearlyStats> {
    let prices: Vec<Option<f64>> = series.prices().iter().map(|&p| Some(p)).collect();
    yearly_groups(series.dates(), &prices)
        .into_iter()
        .filter_map(|(year, values)| SummaryStats::from_data(&values).map(|stats| YearlyStats { year, stats }))
        .collect()
}

/// Summaries of each configured MA column that has defined values.
pub fn rolling_stats(derived: &DerivedSeries) -> Vec<RollingWindowStats> {
    derived
        .ma_windows()
        .filter_map(|window| {
            let values = defined(derived.moving_average(window)?);
            Some(RollingWindowStats {
                window,
                mean: mean(&values)?,
                std: sample_std(&values),
                min: min(&values)?,
                max: max(&values)?,
            })
        })
        .collect()
}

pub fn analyze_trends(series: &PriceSeries, derived: &DerivedSeries) -> TrendReport {
    tracing::info!(n = series.len(), "analyzing price trends");
    let prices = series.prices().to_vec();
    TrendReport {
        linear_trend: linear_trend(&prices),
        yearly_stats: yearly_stats(series),
        rolling_stats: rolling_stats(derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::TRADING_DAYS_PER_YEAR;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of a linear price path.
    // - The p-value and standard error on a noisy example.
    // - Year grouping and single-observation years.
    // - Omission of MA windows without defined values.
    // -------------------------------------------------------------------------

    fn daily(start: NaiveDate, prices: &[f64]) -> PriceSeries {
        let dates = (0..prices.len()).map(|i| start + chrono::Days::new(i as u64)).collect();
        PriceSeries::new(dates, prices.to_vec()).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // price[i] = 50 + i must give slope 1 and R² ≈ 1.
    fn linear_series_has_unit_slope_and_perfect_fit() {
        // Arrange
        let y: Vec<f64> = (0..200).map(|i| 50.0 + i as f64).collect();

        // Act
        let t = linear_trend(&y).unwrap();

        // Assert
        assert_relative_eq!(t.slope, 1.0, epsilon = 1e-10);
        assert_relative_eq!(t.intercept, 50.0, epsilon = 1e-8);
        assert!(t.r_squared >= 0.999);
        assert!(t.p_value < 1e-10);
        assert!(t.std_error < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Check slope, standard error and p-value on a four-point example.
    //
    // Given
    // -----
    // - y = [1, 3, 2, 5]: slope 1.1, SE sqrt(0.27), t ≈ 2.117, df 2.
    //
    // Expect
    // ------
    // - p = 2·sf_t2(2.117) ≈ 0.168.
    fn noisy_series_matches_closed_form() {
        let t = linear_trend(&[1.0, 3.0, 2.0, 5.0]).unwrap();
        assert_relative_eq!(t.slope, 1.1, epsilon = 1e-12);
        assert_relative_eq!(t.std_error, 0.27_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(t.p_value, 0.1684, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Flat and too-short inputs follow the guards.
    fn flat_and_short_series() {
        let flat = linear_trend(&[4.0; 10]).unwrap();
        assert_eq!(flat.slope, 0.0);
        assert_eq!(flat.r_squared, 0.0);
        assert_relative_eq!(flat.p_value, 1.0, epsilon = 1e-12);
        assert!(linear_trend(&[1.0, 2.0]).is_none());
    }

    #[test]
    // Purpose
    // -------
    // Years are grouped by calendar year; a one-day year has no std.
    //
    // Given
    // -----
    // - 2020-12-30, 2020-12-31, 2021-01-01 with prices 10, 20, 30.
    fn yearly_stats_groups_by_calendar_year() {
        // Arrange
        let s = daily(NaiveDate::from_ymd_opt(2020, 12, 30).unwrap(), &[10.0, 20.0, 30.0]);

        // Act
        let ys = yearly_stats(&s);

        // Assert
        assert_eq!(ys.len(), 2);
        assert_eq!(ys[0].year, 2020);
        assert_eq!(ys[0].stats.mean, 15.0);
        assert!(ys[0].stats.std.is_some());
        assert_eq!(ys[1].year, 2021);
        assert_eq!(ys[1].stats.std, None);
    }

    #[test]
    // Purpose
    // -------
    // MA windows longer than the series are absent from the summary.
    fn rolling_stats_omits_undefined_windows() {
        // Arrange
        let prices: Vec<f64> = (0..20).map(|i| 10.0 + i as f64).collect();
        let s = daily(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), &prices);
        let d = DerivedSeries::build(&s, &[5, 30], &[], TRADING_DAYS_PER_YEAR).unwrap();

        // Act
        let rs = rolling_stats(&d);

        // Assert
        assert_eq!(rs.len(), 1);
        assert_eq!(rs[0].window, 5);
        assert_relative_eq!(rs[0].min, 12.0, epsilon = 1e-12);
        assert_relative_eq!(rs[0].max, 27.0, epsilon = 1e-12);
    }
}
