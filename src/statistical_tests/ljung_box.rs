//! statistical_tests::ljung_box — Ljung–Box portmanteau test.
//!
//! Applied to squared returns, a significant Q indicates volatility
//! clustering (ARCH effects).
//!
//! - Sample autocorrelations use the full-sample denominator
//!   `ρ̂_k = Σ_{t} (x_t − x̄)(x_{t+k} − x̄) / Σ_t (x_t − x̄)²`.
//! - `Q = n(n+2) Σ_{k=1}^{h} ρ̂_k² / (n − k)`, p-value from `χ²(h)`.
use crate::statistical_tests::{
    errors::{TestError, TestResult},
    validation::{ensure_finite, validate_series},
};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Outcome of a Ljung–Box test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LjungBoxOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub lags: usize,
}

impl LjungBoxOutcome {
    /// Run the Ljung–Box test with `lags` autocorrelations.
    ///
    /// Errors
    /// ------
    /// - `InsufficientData` when `data.len() ≤ lags` or `lags == 0`.
    /// - `ZeroVariance` for a constant series.
    pub fn ljung_box(data: &[f64], lags: usize) -> TestResult<Self> {
        if lags == 0 {
            return Err(TestError::InsufficientData { needed: 1, got: 0 });
        }
        validate_series(data, lags + 1)?;
        let n = data.len();
        let nf = n as f64;
        let mean = data.iter().sum::<f64>() / nf;
        let centered: Vec<f64> = data.iter().map(|&x| x - mean).collect();
        let denom: f64 = centered.iter().map(|e| e * e).sum();
        if !(denom > 0.0) {
            return Err(TestError::ZeroVariance);
        }

        let q: f64 = (1..=lags)
            .map(|k| {
                let acf = centered[k..].iter().zip(&centered).map(|(a, b)| a * b).sum::<f64>() / denom;
                acf * acf / (nf - k as f64)
            })
            .sum::<f64>()
            * nf
            * (nf + 2.0);
        let statistic = ensure_finite(q)?;

        let chi2 =
            ChiSquared::new(lags as f64).map_err(|e| TestError::Distribution(e.to_string()))?;
        Ok(LjungBoxOutcome { statistic, p_value: chi2.sf(statistic), lags })
    }
}
