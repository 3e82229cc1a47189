//! report::summary — the headline report and the full analysis bundle.
//!
//! Purpose
//! -------
//! Compose analyzer outputs into the two aggregate payloads consumed by a
//! presentation layer: [`AnalysisReport`] (headline numbers) and
//! [`FullAnalysis`] (every analyzer's full output).
//!
//! Key behaviors
//! -------------
//! - Returns statistics use the defined returns only.
//! - `volatility.current` and `volatility_regime.current` are the latest
//!   *defined* value of the primary rolling volatility.
//! - `latest.return_kd` is the sum of the last `k` returns, `None` when
//!   fewer than `k` defined returns exist.
//! - Test failures inside [`FullAnalysis`] surface as `None` fields; the
//!   bundle itself is always produced.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both payloads are plain values: once returned they no longer refer to
//!   the context.
use crate::analysis::{
    DistributionReport, StationarityReport, SummaryStats, TrendReport, VolatilityRegime,
    VolatilityReport, analyze_distribution, analyze_trends, analyze_volatility,
    descriptive::{defined, excess_kurtosis, mean, sample_std, skewness},
    test_stationarity, volatility::volatility_regime,
};
use crate::errors::AnalysisResult;
use crate::report::context::AnalysisContext;
use crate::series::{DateRange, SeriesError};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnStats {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityStats {
    pub mean: Option<f64>,
    pub current: Option<f64>,
}

/// Snapshot of the most recent observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatestSnapshot {
    pub date: NaiveDate,
    pub price: f64,
    pub return_1d: Option<f64>,
    pub return_5d: Option<f64>,
    pub return_21d: Option<f64>,
}

/// Headline statistics of the whole series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_days: usize,
    pub date_range: DateRange,
    pub price: SummaryStats,
    pub returns: ReturnStats,
    pub volatility: VolatilityStats,
    pub volatility_regime: VolatilityRegime,
    pub latest: LatestSnapshot,
    pub total_events: usize,
    pub detected_change_points: usize,
}

/// Sum of the last `k` returns; `None` when any of them is undefined or
/// there are fewer than `k`.
pub fn cumulative_return(returns: &[Option<f64>], k: usize) -> Option<f64> {
    if k == 0 {
        return None;
    }
    let start = returns.len().checked_sub(k)?;
    returns[start..].iter().copied().sum()
}

impl AnalysisReport {
    /// Build the headline report for `ctx`.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::EmptySeries` is unreachable for a validated
    ///   context but is propagated rather than assumed away.
    pub fn from_context(ctx: &AnalysisContext) -> AnalysisResult<Self> {
        let series = ctx.series();
        let opts = ctx.options();
        let returns = ctx.derived().defined_returns();
        let volatility = ctx.primary_volatility();
        let regime = volatility_regime(volatility, opts.regime_high, opts.regime_low);

        let prices = series.prices().to_vec();
        let price = SummaryStats::from_data(&prices).ok_or(SeriesError::EmptySeries)?;
        let all_returns = ctx.derived().returns();

        tracing::debug!(observations = series.len(), "building summary report");
        Ok(AnalysisReport {
            total_days: series.len(),
            date_range: series.date_range(),
            price,
            returns: ReturnStats {
                mean: mean(&returns),
                std: sample_std(&returns),
                skewness: skewness(&returns),
                kurtosis: excess_kurtosis(&returns),
            },
            volatility: VolatilityStats { mean: mean(&defined(volatility)), current: regime.current },
            volatility_regime: regime,
            latest: LatestSnapshot {
                date: series.last_date(),
                price: series.last_price(),
                return_1d: cumulative_return(all_returns, 1),
                return_5d: cumulative_return(all_returns, 5),
                return_21d: cumulative_return(all_returns, 21),
            },
            total_events: ctx.events().len(),
            detected_change_points: ctx.change_points().len(),
        })
    }
}

/// Every analyzer's output for one context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullAnalysis {
    pub price_stationarity: StationarityReport,
    pub returns_stationarity: StationarityReport,
    pub trend: TrendReport,
    pub volatility: VolatilityReport,
    pub distribution: DistributionReport,
}

impl FullAnalysis {
    pub fn run(ctx: &AnalysisContext) -> Self {
        let series = ctx.series();
        let derived = ctx.derived();
        let opts = ctx.options();
        tracing::info!(observations = series.len(), "running full analysis");
        FullAnalysis {
            price_stationarity: test_stationarity(
                &series.prices().to_vec(),
                "Price",
                opts.significance,
                opts.kpss_kernel,
            ),
            returns_stationarity: test_stationarity(
                &derived.defined_returns(),
                "Returns",
                opts.significance,
                opts.kpss_kernel,
            ),
            trend: analyze_trends(series, derived),
            volatility: analyze_volatility(series, derived, opts),
            distribution: analyze_distribution(series, derived, opts.significance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisOptions, Regime};
    use crate::events::{ChangePoint, EventRecord};
    use crate::series::PriceSeries;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cumulative k-day returns, including short histories.
    // - Headline fields on a small hand-checkable series.
    // - Constant prices: zero volatility, NORMAL regime.
    // - FullAnalysis never failing as a whole.
    // -------------------------------------------------------------------------

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn daily(prices: Vec<f64>) -> PriceSeries {
        let dates = (0..prices.len()).map(|i| d(2020, 1, 1) + chrono::Days::new(i as u64)).collect();
        PriceSeries::new(dates, prices).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // k-day returns sum the tail and require k defined returns.
    fn cumulative_return_requires_full_tail() {
        let r = vec![None, Some(1.0), Some(2.0), Some(-0.5)];
        assert_relative_eq!(cumulative_return(&r, 1).unwrap(), -0.5);
        assert_relative_eq!(cumulative_return(&r, 3).unwrap(), 2.5);
        assert_eq!(cumulative_return(&r, 4), None);
        assert_eq!(cumulative_return(&r, 5), None);
    }

    #[test]
    // Purpose
    // -------
    // Headline counts, latest snapshot and price stats.
    //
    // Given
    // -----
    // - Prices 10, 11, 12, 13 over four days, one event, one change point.
    //
    // Expect
    // ------
    // - total_days 4, latest price 13, return_1d = 100·ln(13/12),
    //   return_5d None, price median 11.5.
    fn report_on_short_series() {
        // Arrange
        let ctx = AnalysisContext::new(
            daily(vec![10.0, 11.0, 12.0, 13.0]),
            vec![EventRecord::new(0, d(2020, 1, 2), "e", "t")],
            vec![ChangePoint::new(d(2020, 1, 3), 0.9, 10.0, 12.0, 20.0).unwrap()],
            AnalysisOptions::default(),
        )
        .unwrap();

        // Act
        let r = AnalysisReport::from_context(&ctx).unwrap();

        // Assert
        assert_eq!(r.total_days, 4);
        assert_eq!(r.date_range.start, d(2020, 1, 1));
        assert_eq!(r.date_range.end, d(2020, 1, 4));
        assert_relative_eq!(r.price.median, 11.5);
        assert_eq!(r.latest.price, 13.0);
        assert_relative_eq!(r.latest.return_1d.unwrap(), 100.0 * (13.0_f64 / 12.0).ln(), epsilon = 1e-12);
        assert_relative_eq!(r.returns.mean.unwrap(), 100.0 * (1.3_f64).ln() / 3.0, epsilon = 1e-12);
        assert_eq!(r.latest.return_5d, None);
        assert_eq!(r.volatility.current, None);
        assert_eq!(r.volatility_regime.regime, Regime::Normal);
        assert_eq!(r.total_events, 1);
        assert_eq!(r.detected_change_points, 1);
    }

    #[test]
    // Purpose
    // -------
    // Constant prices give zero volatility and a guarded NORMAL regime.
    fn constant_prices_are_normal_regime() {
        let ctx = AnalysisContext::new(daily(vec![42.0; 80]), vec![], vec![], AnalysisOptions::default()).unwrap();
        let r = AnalysisReport::from_context(&ctx).unwrap();
        assert_eq!(r.volatility.current, Some(0.0));
        assert_eq!(r.volatility.mean, Some(0.0));
        assert_eq!(r.volatility_regime.regime, Regime::Normal);
        assert_eq!(r.volatility_regime.relative, None);
        assert_eq!(r.returns.skewness, Some(0.0));
    }

    #[test]
    // Purpose
    // -------
    // Failing tests leave holes in the bundle rather than failing it.
    fn full_analysis_absorbs_test_failures() {
        let ctx = AnalysisContext::new(daily(vec![42.0; 80]), vec![], vec![], AnalysisOptions::default()).unwrap();
        let full = FullAnalysis::run(&ctx);
        assert!(full.price_stationarity.adf.is_none());
        assert!(full.price_stationarity.kpss.is_none());
        assert!(full.volatility.clustering.is_none());
        assert_eq!(full.price_stationarity.series_name, "Price");
        assert!(serde_json::to_string(&full).is_ok());
    }
}
