//! series::preprocess — derived columns for a validated price series.
//!
//! Purpose
//! -------
//! Build [`DerivedSeries`] from a [`PriceSeries`]: log prices, percentage
//! log returns, and rolling moving averages / annualized volatilities for
//! each configured window size. Every analyzer in the crate consumes this
//! structure instead of recomputing columns ad hoc.
//!
//! Key behaviors
//! -------------
//! - `log_price[i] = ln(price[i])`.
//! - `returns[i] = (log_price[i] − log_price[i−1]) × 100`, `None` at `i = 0`.
//! - `MA[w][i]` is the mean of the trailing `w` prices, defined from `w − 1`.
//! - `Vol[w][i]` is the sample std of the trailing `w` returns times
//!   `√periods_per_year`, defined from index `w` (the first return is
//!   undefined).
//!
//! Invariants & assumptions
//! ------------------------
//! - All columns have the same length as the source series and are keyed
//!   by the same indices (and therefore the same dates).
//! - Window lists are validated (no zero windows) before any column is
//!   built; duplicates collapse into a single column.
//!
//! Performance
//! -----------
//! - One forward pass per column via `series::rolling`.
use crate::series::{
    data::PriceSeries,
    errors::SeriesResult,
    rolling::{rolling_mean, rolling_volatility},
    validation::validate_windows,
};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Trading days per year used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// `DerivedSeries` — read-only derived columns aligned with a `PriceSeries`.
///
/// Fields
/// ------
/// - `log_prices`: natural log of each price.
/// - `returns`: percentage log returns, `None` at index 0.
/// - `moving_averages`: window → rolling mean of price.
/// - `volatilities`: window → rolling annualized volatility of returns.
/// - `periods_per_year`: annualization constant used for `volatilities`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    log_prices: Array1<f64>,
    returns: Vec<Option<f64>>,
    moving_averages: BTreeMap<usize, Vec<Option<f64>>>,
    volatilities: BTreeMap<usize, Vec<Option<f64>>>,
    periods_per_year: f64,
}

impl DerivedSeries {
    /// Build all derived columns for `series`.
    ///
    /// Parameters
    /// ----------
    /// - `series`: validated price history.
    /// - `ma_windows`: window sizes for rolling price means.
    /// - `volatility_windows`: window sizes for rolling volatility.
    /// - `periods_per_year`: annualization constant (252 for daily data).
    ///
    /// Errors
    /// ------
    /// - `SeriesError::InvalidWindow` if any window is zero.
    pub fn build(
        series: &PriceSeries, ma_windows: &[usize], volatility_windows: &[usize],
        periods_per_year: f64,
    ) -> SeriesResult<Self> {
        validate_windows(ma_windows)?;
        validate_windows(volatility_windows)?;

        let log_prices = series.prices().mapv(f64::ln);
        let mut returns = Vec::with_capacity(series.len());
        returns.push(None);
        returns.extend(log_prices.windows(2).into_iter().map(|w| Some((w[1] - w[0]) * 100.0)));

        let prices: Vec<Option<f64>> = series.prices().iter().map(|&p| Some(p)).collect();
        let moving_averages =
            ma_windows.iter().map(|&w| (w, rolling_mean(&prices, w))).collect::<BTreeMap<_, _>>();
        let volatilities = volatility_windows
            .iter()
            .map(|&w| (w, rolling_volatility(&returns, w, periods_per_year)))
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(
            observations = series.len(),
            ma_windows = ?ma_windows,
            volatility_windows = ?volatility_windows,
            "built derived series"
        );

        Ok(DerivedSeries { log_prices, returns, moving_averages, volatilities, periods_per_year })
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    pub fn log_prices(&self) -> &Array1<f64> {
        &self.log_prices
    }

    pub fn returns(&self) -> &[Option<f64>] {
        &self.returns
    }

    /// Returns with the undefined leading entry dropped.
    pub fn defined_returns(&self) -> Vec<f64> {
        self.returns.iter().flatten().copied().collect()
    }

    pub fn moving_average(&self, window: usize) -> Option<&[Option<f64>]> {
        self.moving_averages.get(&window).map(Vec::as_slice)
    }

    pub fn volatility(&self, window: usize) -> Option<&[Option<f64>]> {
        self.volatilities.get(&window).map(Vec::as_slice)
    }

    /// Rolling volatility for `window`, computed on demand when the window
    /// was not part of the configured set.
    pub fn volatility_or_compute(&self, window: usize) -> Vec<Option<f64>> {
        match self.volatilities.get(&window) {
            Some(col) => col.clone(),
            None => rolling_volatility(&self.returns, window, self.periods_per_year),
        }
    }

    pub fn ma_windows(&self) -> impl Iterator<Item = usize> + '_ {
        self.moving_averages.keys().copied()
    }

    pub fn volatility_windows(&self) -> impl Iterator<Item = usize> + '_ {
        self.volatilities.keys().copied()
    }

    pub fn periods_per_year(&self) -> f64 {
        self.periods_per_year
    }
}
