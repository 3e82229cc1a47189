//! analysis::volatility — volatility summary, clustering, yearly profile and regime.
//!
//! Purpose
//! -------
//! Characterize the rolling annualized volatility of the primary window:
//! distribution of its defined values, evidence of clustering (Ljung–Box on
//! squared returns), the mean per calendar year, and the current regime
//! relative to the historical average.
//!
//! Key behaviors
//! -------------
//! - Regime partition on `ratio = current / historical_avg`:
//!   `HIGH` if `current > avg · high`, `LOW` if `current < avg · low`,
//!   otherwise `NORMAL`. A zero or undefined average yields `NORMAL` with
//!   `relative = None`.
//! - `current` is the latest *defined* volatility; `historical_avg` is the
//!   mean of all defined values.
//! - A failed Ljung–Box test leaves `clustering = None` and is logged.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every defined rolling volatility is `≥ 0`, so the regime partition is
//!   total over the values that reach it.
use crate::analysis::{
    descriptive::{defined, max, mean, median, min, sample_std},
    options::AnalysisOptions,
    stationarity::absorb,
    trend::yearly_groups,
};
use crate::series::{DerivedSeries, PriceSeries};
use crate::statistical_tests::LjungBoxOutcome;
use serde::Serialize;

/// Volatility regime label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    High,
    Normal,
    Low,
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Regime::High => "HIGH",
            Regime::Normal => "NORMAL",
            Regime::Low => "LOW",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityRegime {
    pub current: Option<f64>,
    pub historical_avg: Option<f64>,
    pub relative: Option<f64>,
    pub regime: Regime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilitySummary {
    pub mean_volatility: f64,
    pub median_volatility: f64,
    pub max_volatility: f64,
    pub min_volatility: f64,
    pub volatility_std: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityClustering {
    pub ljung_box_stat: f64,
    pub ljung_box_pvalue: f64,
    pub has_clustering: bool,
}

/// Mean volatility per calendar year, as parallel columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct YearlyVolatility {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityReport {
    pub window: usize,
    pub summary: Option<VolatilitySummary>,
    pub clustering: Option<VolatilityClustering>,
    pub yearly_volatility: YearlyVolatility,
    pub regime: VolatilityRegime,
}

/// Classify `current` against `historical_avg`.
pub fn classify_regime(
    current: Option<f64>, historical_avg: Option<f64>, high: f64, low: f64,
) -> VolatilityRegime {
    let (regime, relative) = match (current, historical_avg) {
        (Some(c), Some(avg)) if avg != 0.0 => {
            let regime = if c > avg * high {
                Regime::High
            } else if c < avg * low {
                Regime::Low
            } else {
                Regime::Normal
            };
            (regime, Some(c / avg))
        }
        _ => (Regime::Normal, None),
    };
    VolatilityRegime { current, historical_avg, relative, regime }
}

/// Regime of a rolling-volatility column.
pub fn volatility_regime(volatility: &[Option<f64>], high: f64, low: f64) -> VolatilityRegime {
    let current = volatility.iter().rev().flatten().next().copied();
    let historical_avg = mean(&defined(volatility));
    classify_regime(current, historical_avg, high, low)
}

pub fn summarize_volatility(volatility: &[Option<f64>]) -> Option<VolatilitySummary> {
    let values = defined(volatility);
    Some(VolatilitySummary {
        mean_volatility: mean(&values)?,
        median_volatility: median(&values)?,
        max_volatility: max(&values)?,
        min_volatility: min(&values)?,
        volatility_std: sample_std(&values),
    })
}

/// Ljung–Box on squared returns; `None` (logged) if the test fails.
pub fn volatility_clustering(returns: &[f64], lags: usize, significance: f64) -> Option<VolatilityClustering> {
    let squared: Vec<f64> = returns.iter().map(|r| r * r).collect();
    absorb(LjungBoxOutcome::ljung_box(&squared, lags), "ljung_box", "squared_returns").map(|lb| {
        VolatilityClustering {
            ljung_box_stat: lb.statistic,
            ljung_box_pvalue: lb.p_value,
            has_clustering: lb.p_value < significance,
        }
    })
}

pub fn yearly_volatility(series: &PriceSeries, volatility: &[Option<f64>]) -> YearlyVolatility {
    let mut out = YearlyVolatility::default();
    for (year, values) in yearly_groups(series.dates(), volatility) {
        if let Some(m) = mean(&values) {
            out.years.push(year);
            out.values.push(m);
        }
    }
    out
}

/// Full volatility analysis for the primary window of `opts`.
pub fn analyze_volatility(
    series: &PriceSeries, derived: &DerivedSeries, opts: &AnalysisOptions,
) -> VolatilityReport {
    let window = opts.primary_volatility_window;
    tracing::info!(window, "analyzing volatility");
    let volatility = derived.volatility_or_compute(window);
    VolatilityReport {
        window,
        summary: summarize_volatility(&volatility),
        clustering: volatility_clustering(&derived.defined_returns(), opts.clustering_lag, opts.significance),
        yearly_volatility: yearly_volatility(series, &volatility),
        regime: volatility_regime(&volatility, opts.regime_high, opts.regime_low),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Regime thresholds (strict at 1.2 / 0.8) and the zero-average guard.
    // - Latest-defined selection of the current value.
    // - Clustering detection and failure absorption.
    // - Yearly means skipping years without defined values.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Boundaries are exclusive: exactly 1.2× or 0.8× is NORMAL.
    fn classify_regime_partitions_at_thresholds() {
        let r = |c: f64| classify_regime(Some(c), Some(10.0), 1.2, 0.8).regime;
        assert_eq!(r(12.5), Regime::High);
        assert_eq!(r(12.0), Regime::Normal);
        assert_eq!(r(8.0), Regime::Normal);
        assert_eq!(r(7.9), Regime::Low);
        assert_eq!(r(0.0), Regime::Low);
        assert_relative_eq!(classify_regime(Some(15.0), Some(10.0), 1.2, 0.8).relative.unwrap(), 1.5);
    }

    #[test]
    // Purpose
    // -------
    // A zero or missing average never divides.
    //
    // Expect
    // ------
    // - NORMAL with relative `None`.
    fn classify_regime_guards_zero_and_missing_average() {
        let zero = classify_regime(Some(0.0), Some(0.0), 1.2, 0.8);
        assert_eq!(zero.regime, Regime::Normal);
        assert_eq!(zero.relative, None);
        let missing = classify_regime(None, None, 1.2, 0.8);
        assert_eq!(missing.regime, Regime::Normal);
        assert_eq!(missing.relative, None);
    }

    #[test]
    // Purpose
    // -------
    // `current` is the latest defined value even if the tail is undefined.
    fn volatility_regime_uses_latest_defined_value() {
        // Arrange
        let vol = vec![None, Some(10.0), Some(20.0), Some(30.0), None];

        // Act
        let r = volatility_regime(&vol, 1.2, 0.8);

        // Assert
        assert_eq!(r.current, Some(30.0));
        assert_eq!(r.historical_avg, Some(20.0));
        assert_eq!(r.regime, Regime::High);
    }

    #[test]
    // Purpose
    // -------
    // Squared returns with blocks of high and low magnitude cluster; a
    // constant return series makes Ljung–Box fail and yields `None`.
    fn volatility_clustering_detects_blocks_and_absorbs_failure() {
        // Arrange
        let clustered: Vec<f64> = (0..300)
            .map(|t| {
                let magnitude = if (t / 25) % 2 == 0 { 3.0 } else { 0.1 };
                let sign = if t % 2 == 0 { 1.0 } else { -1.0 };
                magnitude * sign
            })
            .collect();

        // Act
        let c = volatility_clustering(&clustered, 10, 0.05);
        let none = volatility_clustering(&[1.0; 50], 10, 0.05);

        // Assert
        assert!(c.unwrap().has_clustering);
        assert!(none.is_none());
    }

    #[test]
    // Purpose
    // -------
    // Years with no defined volatility are omitted.
    fn yearly_volatility_skips_undefined_years() {
        // Arrange
        let d0 = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let dates = vec![
            d0,
            NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
        ];
        let s = PriceSeries::new(dates, vec![1.0, 2.0, 3.0]).unwrap();
        let vol = vec![None, Some(4.0), Some(6.0)];

        // Act
        let y = yearly_volatility(&s, &vol);

        // Assert
        assert_eq!(y.years, vec![2021]);
        assert_eq!(y.values, vec![5.0]);
    }

    #[test]
    // Purpose
    // -------
    // Regime labels serialize in upper case.
    fn regime_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Regime::High).unwrap(), "\"HIGH\"");
        assert_eq!(Regime::Low.to_string(), "LOW");
    }
}
