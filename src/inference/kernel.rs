//! Kernel tapers and automatic bandwidths for long-run variance estimation.
//!
//! This module provides:
//! - A `KernelType` enum with common long-run variance tapers (Bartlett/Newey–West,
//!   Parzen, QS).
//! - Per-lag weights `w(x)` where `x = k/(L+1)`.
//! - The Hobijn–Franses–Ooms automatic bandwidth used by the KPSS test,
//!   `L = ⌊1.1447 · (ŝ²)^{1/3} · n^{1/3}⌋` with `ŝ` built from the first
//!   `⌊n^{2/9}⌋` autocovariances.
//! - [`long_run_variance`], the kernel-weighted variance of a residual
//!   series on the `1/n` scale.
//!
//! Conventions:
//! - Residual series are expected to be demeaned (or detrended) upstream.
//! - Autocovariances use the `1/n` denominator.
use crate::inference::errors::{InferenceError, InferenceResult};
use ndarray::{ArrayView1, s};
use serde::{Deserialize, Serialize};

/// Long-run variance taper family.
///
/// - `Bartlett`: triangular (Newey–West) kernel, compact support on |x|≤1.
/// - `Parzen`: smoother compact-support kernel with heavier down-weighting at high lags.
/// - `QuadraticSpectral`: infinite-support taper with high large-sample efficiency.
///
/// The taper argument is taken as `x = k/(L+1)` to avoid divide-by-zero at `k=L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    #[default]
    Bartlett,
    Parzen,
    QuadraticSpectral,
}

impl KernelType {
    /// Evaluate the kernel weight at the given taper argument.
    ///
    /// # Arguments
    /// - `input`: real number, typically `x = k/(L+1)` where `k` is the lag and `L` the bandwidth.
    ///
    /// # Returns
    /// Kernel value `w(x)`; equal to 1.0 at `x = 0` for every family.
    pub fn weight(&self, input: f64) -> f64 {
        let abs_input = input.abs();
        match self {
            KernelType::Bartlett => {
                if abs_input <= 1.0 {
                    1.0 - abs_input
                } else {
                    0.0
                }
            }
            KernelType::Parzen => {
                if abs_input <= 0.5 {
                    let abs_input_squared = abs_input * abs_input;
                    1.0 - 6.0 * abs_input_squared + 6.0 * abs_input * abs_input_squared
                } else if abs_input <= 1.0 {
                    2.0 * (1.0 - abs_input).powi(3)
                } else {
                    0.0
                }
            }
            KernelType::QuadraticSpectral => {
                if input == 0.0 {
                    1.0
                } else {
                    let pi_x = std::f64::consts::PI * input;
                    let trig_input = 6.0 * pi_x / 5.0;
                    (25.0 / (12.0 * (pi_x.powi(2))))
                        * ((trig_input).sin() / trig_input - (trig_input).cos())
                }
            }
        }
    }
}

/// Lag-`k` autocovariance sum `Σ_{t=k}^{n-1} e_t e_{t-k}` (no scaling).
fn lagged_cross_product(resids: ArrayView1<f64>, lag: usize) -> f64 {
    let n = resids.len();
    if lag >= n {
        return 0.0;
    }
    resids.slice(s![lag..]).dot(&resids.slice(s![..n - lag]))
}

/// Automatic bandwidth of Hobijn, Franses & Ooms (1998) for KPSS.
///
/// # Arguments
/// - `resids`: demeaned series of length `n ≥ 2`.
///
/// # Returns
/// Non-negative integer bandwidth, truncated to `n − 1`. Returns `0`
/// when the preliminary variance estimate is not positive.
pub fn hobijn_bandwidth(resids: ArrayView1<f64>) -> usize {
    let n = resids.len();
    if n < 2 {
        return 0;
    }
    let nf = n as f64;
    let cov_lags = nf.powf(2.0 / 9.0) as usize;
    let mut s0 = resids.dot(&resids) / nf;
    let mut s1 = 0.0;
    for i in 1..=cov_lags {
        let prod = lagged_cross_product(resids, i) / (nf / 2.0);
        s0 += prod;
        s1 += i as f64 * prod;
    }
    if !(s0 > 0.0) {
        return 0;
    }
    let s_hat = s1 / s0;
    let gamma_hat = 1.1447 * (s_hat * s_hat).powf(1.0 / 3.0);
    let lags = (gamma_hat * nf.powf(1.0 / 3.0)) as usize;
    lags.min(n - 1)
}

/// Kernel-weighted long-run variance on the `1/n` scale.
///
/// Computes `σ̂² = (1/n) [ Σ e_t² + 2 Σ_{k=1}^{K} w(k/(L+1)) Σ_t e_t e_{t-k} ]`
/// with `K = L` for the compact Bartlett and Parzen tapers and `K = n − 1`
/// for the quadratic-spectral taper, whose weights never vanish.
///
/// # Errors
/// - `DegenerateVariance` if the estimate is not strictly positive and
///   finite (e.g., a constant input series).
pub fn long_run_variance(
    resids: ArrayView1<f64>, bandwidth: usize, kernel: KernelType,
) -> InferenceResult<f64> {
    let n = resids.len();
    let max_lag = match kernel {
        KernelType::QuadraticSpectral => n.saturating_sub(1),
        KernelType::Bartlett | KernelType::Parzen => bandwidth.min(n.saturating_sub(1)),
    };
    let mut total = resids.dot(&resids);
    for lag in 1..=max_lag {
        let weight = kernel.weight(lag as f64 / (bandwidth as f64 + 1.0));
        total += 2.0 * weight * lagged_cross_product(resids, lag);
    }
    let variance = total / n as f64;
    if !(variance > 0.0) || !variance.is_finite() {
        return Err(InferenceError::DegenerateVariance { variance });
    }
    Ok(variance)
}
