//! statistical_tests::adf — Augmented Dickey–Fuller unit-root test.
//!
//! Purpose
//! -------
//! Test the null of a unit root against stationarity around a constant,
//! selecting the number of augmenting lags by AIC.
//!
//! Key behaviors
//! -------------
//! - Regression: `Δy_t = α + γ y_{t−1} + Σ_{i=1}^{p} β_i Δy_{t−i} + ε_t`;
//!   the statistic is the t-ratio of `γ`.
//! - Lag search over `p ∈ 0..=maxlag` with
//!   `maxlag = ⌈12 (n/100)^{1/4}⌉`, capped at `n/2 − 2`. Every candidate
//!   is fitted on the same sample (the one implied by `maxlag`) so AIC
//!   values are comparable; the winner is refitted on its own full sample.
//! - p-value and critical values come from `mackinnon`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is finite with at least [`ADF_MIN_OBS`] observations.
//! - `nobs` in the outcome is the row count of the final regression.
//!
//! Testing notes
//! -------------
//! - Unit tests use a deterministic AR(1) recursion and a random walk
//!   built from a fixed pseudo-random sequence, plus a constant series to
//!   exercise the singular-regression path.
//! - One ARMA(1,1) series is pinned to reference values from the
//!   `statsmodels` `adfuller(regression="c", autolag="AIC")` procedure.
use crate::inference::ols::{OlsFit, fit_ols};
use crate::statistical_tests::{
    errors::TestResult,
    mackinnon::{AdfCriticalValues, mackinnon_critical_values, mackinnon_p_value},
    validation::{ensure_finite, validate_series},
};
use ndarray::{Array1, Array2};
use serde::Serialize;

/// Smallest series length accepted by [`AdfOutcome::adf`].
pub const ADF_MIN_OBS: usize = 4;

/// Outcome of an ADF test.
///
/// Fields
/// ------
/// - `statistic`: t-ratio of the lagged level coefficient.
/// - `p_value`: MacKinnon approximate p-value.
/// - `critical_values`: 1%/5%/10% finite-sample critical values.
/// - `used_lag`: number of augmenting lagged differences selected by AIC.
/// - `nobs`: observations in the final regression.
/// - `is_stationary`: `p_value ≤ significance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdfOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub critical_values: AdfCriticalValues,
    pub used_lag: usize,
    pub nobs: usize,
    pub is_stationary: bool,
}

impl AdfOutcome {
    /// Run the ADF test with a constant and AIC lag selection.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Series in levels (e.g., prices or returns).
    /// - `significance`: `f64`
    ///   Level for the `is_stationary` decision (0.05 by default upstream).
    ///
    /// Errors
    /// ------
    /// - `InsufficientData` / `InvalidData` from input validation.
    /// - `SingularDesign` when the auxiliary regression cannot be solved
    ///   (e.g., a constant series).
    /// - `NonFiniteStatistic` when the t-ratio is NaN or infinite.
    pub fn adf(data: &[f64], significance: f64) -> TestResult<Self> {
        validate_series(data, ADF_MIN_OBS)?;
        let n = data.len();
        let diffs: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
        let maxlag = max_lag(n);

        let mut best: Option<(f64, usize)> = None;
        for lags in 0..=maxlag {
            let (x, y) = build_design(data, &diffs, lags, maxlag);
            let aic = fit_ols(&x, &y)?.aic();
            if best.map_or(true, |(best_aic, _)| aic < best_aic) {
                best = Some((aic, lags));
            }
        }
        let used_lag = best.map_or(0, |(_, lags)| lags);

        let (x, y) = build_design(data, &diffs, used_lag, used_lag);
        let fit: OlsFit = fit_ols(&x, &y)?;
        let statistic = ensure_finite(fit.t_stat(1))?;
        let p_value = mackinnon_p_value(statistic)?;

        tracing::debug!(statistic, p_value, used_lag, maxlag, nobs = fit.nobs, "adf test");

        Ok(AdfOutcome {
            statistic,
            p_value,
            critical_values: mackinnon_critical_values(fit.nobs),
            used_lag,
            nobs: fit.nobs,
            is_stationary: p_value <= significance,
        })
    }
}

/// Schwert-style upper bound on augmenting lags.
fn max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    schwert.min((n / 2).saturating_sub(2))
}

/// Build `[1, y_{t−1}, Δy_{t−1}, …, Δy_{t−lags}]` and `Δy_t` for rows
/// `t = start..diffs.len()`, where `diffs[t] = y[t+1] − y[t]`.
fn build_design(data: &[f64], diffs: &[f64], lags: usize, start: usize) -> (Array2<f64>, Array1<f64>) {
    let rows = diffs.len() - start;
    let x = Array2::from_shape_fn((rows, lags + 2), |(r, c)| {
        let t = start + r;
        match c {
            0 => 1.0,
            1 => data[t],
            lag => diffs[t - (lag - 1)],
        }
    });
    let y = Array1::from_iter(diffs[start..].iter().copied());
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::errors::TestError;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Rejection of the unit root for a strongly mean-reverting series.
    // - Non-rejection for a random walk.
    // - Lag bounds and design construction.
    // - Constant and too-short series.
    // -------------------------------------------------------------------------

    /// Deterministic pseudo-random shocks in (−0.5, 0.5).
    fn shocks(n: usize) -> Vec<f64> {
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        (0..n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 10_000) as f64 / 10_000.0 - 0.5
            })
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // A stationary AR(1) with φ = 0.2 must be flagged stationary.
    //
    // Given
    // -----
    // - 300 observations of y_t = 0.2 y_{t−1} + e_t.
    //
    // Expect
    // ------
    // - statistic below the 1% critical value, p ≤ 0.05.
    fn adf_rejects_unit_root_for_mean_reverting_series() {
        // Arrange
        let e = shocks(300);
        let mut y = vec![0.0; 300];
        for t in 1..300 {
            y[t] = 0.2 * y[t - 1] + e[t];
        }

        // Act
        let out = AdfOutcome::adf(&y, 0.05).unwrap();

        // Assert
        assert!(out.is_stationary, "expected stationarity, got {out:?}");
        assert!(out.statistic < out.critical_values.one_pct);
        assert!(out.used_lag <= max_lag(300));
        assert_eq!(out.nobs, 299 - out.used_lag);
    }

    #[test]
    // Purpose
    // -------
    // A random walk must not be declared stationary.
    //
    // Given
    // -----
    // - 300 cumulative sums of bounded shocks with positive drift.
    //
    // Expect
    // ------
    // - p > 0.05.
    fn adf_does_not_reject_for_random_walk() {
        // Arrange
        let e = shocks(300);
        let y: Vec<f64> = e
            .iter()
            .scan(100.0, |acc, &x| {
                *acc += x + 0.3;
                Some(*acc)
            })
            .collect();

        // Act
        let out = AdfOutcome::adf(&y, 0.05).unwrap();

        // Assert
        assert!(!out.is_stationary, "random walk flagged stationary: {out:?}");
        assert!((0.0..=1.0).contains(&out.p_value));
    }

    #[test]
    // Purpose
    // -------
    // Verify the maxlag formula and its small-sample cap.
    fn max_lag_follows_schwert_rule_with_cap() {
        assert_eq!(max_lag(100), 12);
        assert_eq!(max_lag(150), 14);
        assert_eq!(max_lag(500), 18);
        assert_eq!(max_lag(1000), 22);
        assert_eq!(max_lag(9011), 37);
        assert_eq!(max_lag(10), 3);
        assert_eq!(max_lag(4), 0);
    }

    #[test]
    // Purpose
    // -------
    // Pin the full procedure (lag bound, AIC search, refit) to reference
    // values.
    //
    // Given
    // -----
    // - 150 observations of y_t = 0.7 y_{t−1} + e_t + 0.6 e_{t−1}, y_0 = 0.
    //
    // Expect
    // ------
    // - maxlag 14, AIC picks 4 lags, 145 rows, statistic ≈ −3.775407.
    //   With a lag bound of 13 AIC would pick 2 lags instead.
    fn adf_matches_reference_for_arma_series() {
        // Arrange
        let e = shocks(150);
        let mut y = vec![0.0; 150];
        for t in 1..150 {
            y[t] = 0.7 * y[t - 1] + e[t] + 0.6 * e[t - 1];
        }

        // Act
        let out = AdfOutcome::adf(&y, 0.05).unwrap();

        // Assert
        assert_eq!(out.used_lag, 4);
        assert_eq!(out.nobs, 145);
        assert_relative_eq!(out.statistic, -3.775_407_129_647_985, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Check the column layout of the auxiliary regression.
    //
    // Given
    // -----
    // - y = [1, 2, 4, 7, 11], Δy = [1, 2, 3, 4], lags = 1, start = 1.
    //
    // Expect
    // ------
    // - Rows t = 1..3: [1, y_t, Δy_{t−1}], response Δy_t.
    fn build_design_layout() {
        // Arrange
        let y = [1.0, 2.0, 4.0, 7.0, 11.0];
        let d = [1.0, 2.0, 3.0, 4.0];

        // Act
        let (x, resp) = build_design(&y, &d, 1, 1);

        // Assert
        assert_eq!(x.dim(), (3, 3));
        assert_eq!(x.row(0).to_vec(), vec![1.0, 2.0, 1.0]);
        assert_eq!(x.row(2).to_vec(), vec![1.0, 7.0, 3.0]);
        assert_eq!(resp.to_vec(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate inputs surface as errors, never as bogus statistics.
    fn adf_constant_and_short_series_fail() {
        assert_eq!(AdfOutcome::adf(&[5.0; 50], 0.05), Err(TestError::SingularDesign));
        assert_eq!(
            AdfOutcome::adf(&[1.0, 2.0, 3.0], 0.05),
            Err(TestError::InsufficientData { needed: 4, got: 3 })
        );
    }
}
