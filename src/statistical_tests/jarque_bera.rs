//! statistical_tests::jarque_bera — Jarque–Bera normality test.
//!
//! `JB = n/6 · (S² + (K − 3)²/4)` with the *biased* (moment) sample
//! skewness `S` and kurtosis `K`; the p-value is the `χ²(2)` upper tail.
use crate::statistical_tests::{
    errors::{TestError, TestResult},
    validation::{ensure_finite, validate_series},
};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Outcome of a Jarque–Bera test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JarqueBeraOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

impl JarqueBeraOutcome {
    /// Errors
    /// ------
    /// - `InsufficientData` for fewer than two observations.
    /// - `ZeroVariance` for a constant series.
    pub fn jarque_bera(data: &[f64]) -> TestResult<Self> {
        validate_series(data, 2)?;
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let (m2, m3, m4) = data.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
            let d = x - mean;
            let d2 = d * d;
            (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
        });
        let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);
        if !(m2 > 0.0) {
            return Err(TestError::ZeroVariance);
        }
        let skew = m3 / m2.powf(1.5);
        let kurt = m4 / (m2 * m2);
        let statistic = ensure_finite(n / 6.0 * (skew * skew + (kurt - 3.0).powi(2) / 4.0))?;

        let chi2 = ChiSquared::new(2.0).map_err(|e| TestError::Distribution(e.to_string()))?;
        Ok(JarqueBeraOutcome { statistic, p_value: chi2.sf(statistic) })
    }
}
