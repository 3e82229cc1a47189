//! statistical_tests::kpss — KPSS test of level stationarity.
//!
//! Purpose
//! -------
//! Test the null of stationarity around a constant level (Kwiatkowski,
//! Phillips, Schmidt & Shin, 1992), complementing the ADF unit-root test.
//!
//! Key behaviors
//! -------------
//! - Residuals `e_t = y_t − ȳ`; partial sums `S_t = Σ_{s≤t} e_s`.
//! - Statistic `η = Σ S_t² / (n² σ̂²)` where `σ̂²` is the kernel long-run
//!   variance (Bartlett unless another taper is requested) with the Hobijn
//!   et al. automatic bandwidth.
//! - p-value interpolated linearly in the KPSS table and clipped to
//!   `[0.01, 0.10]`; values outside the table saturate at the endpoints.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constant series has zero long-run variance and fails with
//!   `TestError::ZeroVariance`.
use crate::inference::kernel::{KernelType, hobijn_bandwidth, long_run_variance};
use crate::statistical_tests::{
    errors::TestResult,
    validation::{ensure_finite, validate_series},
};
use ndarray::Array1;
use serde::Serialize;

/// Smallest series length accepted by [`KpssOutcome::kpss`].
pub const KPSS_MIN_OBS: usize = 3;

const KPSS_CRIT: [f64; 4] = [0.347, 0.463, 0.574, 0.739];
const KPSS_PVALS: [f64; 4] = [0.10, 0.05, 0.025, 0.01];

/// Critical values of the level-stationarity KPSS statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpssCriticalValues {
    #[serde(rename = "10%")]
    pub ten_pct: f64,
    #[serde(rename = "5%")]
    pub five_pct: f64,
    #[serde(rename = "2.5%")]
    pub two_half_pct: f64,
    #[serde(rename = "1%")]
    pub one_pct: f64,
}

const CRITICAL_VALUES: KpssCriticalValues = KpssCriticalValues {
    ten_pct: KPSS_CRIT[0],
    five_pct: KPSS_CRIT[1],
    two_half_pct: KPSS_CRIT[2],
    one_pct: KPSS_CRIT[3],
};

/// Outcome of a KPSS test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpssOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub critical_values: KpssCriticalValues,
    pub lags: usize,
    pub is_stationary: bool,
}

impl KpssOutcome {
    /// Run the KPSS level-stationarity test.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Series in levels.
    /// - `significance`: `f64`
    ///   `is_stationary` is `p_value ≥ significance`.
    ///
    /// Errors
    /// ------
    /// - `InsufficientData` / `InvalidData` from input validation.
    /// - `ZeroVariance` when the long-run variance is not positive.
    /// - `NonFiniteStatistic` on numerical overflow.
    pub fn kpss(data: &[f64], significance: f64) -> TestResult<Self> {
        Self::kpss_with_kernel(data, significance, KernelType::Bartlett)
    }

    /// [`KpssOutcome::kpss`] with an explicit long-run variance taper.
    pub fn kpss_with_kernel(data: &[f64], significance: f64, kernel: KernelType) -> TestResult<Self> {
        validate_series(data, KPSS_MIN_OBS)?;
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let resids: Array1<f64> = data.iter().map(|&y| y - mean).collect();

        let lags = hobijn_bandwidth(resids.view());
        let variance = long_run_variance(resids.view(), lags, kernel)?;
        let eta = resids
            .iter()
            .scan(0.0, |partial, &e| {
                *partial += e;
                Some(*partial * *partial)
            })
            .sum::<f64>()
            / (n * n);
        let statistic = ensure_finite(eta / variance)?;
        let p_value = interpolate_p_value(statistic);

        tracing::debug!(statistic, p_value, lags, ?kernel, "kpss test");

        Ok(KpssOutcome {
            statistic,
            p_value,
            critical_values: CRITICAL_VALUES,
            lags,
            is_stationary: p_value >= significance,
        })
    }
}

/// Linear interpolation of the KPSS table, saturating at the endpoints.
fn interpolate_p_value(stat: f64) -> f64 {
    if stat <= KPSS_CRIT[0] {
        return KPSS_PVALS[0];
    }
    for i in 1..KPSS_CRIT.len() {
        if stat <= KPSS_CRIT[i] {
            let frac = (stat - KPSS_CRIT[i - 1]) / (KPSS_CRIT[i] - KPSS_CRIT[i - 1]);
            return KPSS_PVALS[i - 1] + frac * (KPSS_PVALS[i] - KPSS_PVALS[i - 1]);
        }
    }
    KPSS_PVALS[KPSS_PVALS.len() - 1]
}
