//! statistical_tests::mackinnon — response-surface tables for the ADF test.
//!
//! Purpose
//! -------
//! Approximate p-values (MacKinnon 1994) and finite-sample critical values
//! (MacKinnon 2010) for the Dickey–Fuller τ statistic in the
//! constant-only, single-series case.
//!
//! Conventions
//! -----------
//! - Polynomials are stored lowest order first.
//! - p-values are `Φ(Σ c_i τ^i)` with the small-p branch used for
//!   `τ ≤ TAU_STAR`, and saturate to 0/1 outside `[TAU_MIN, TAU_MAX]`.
//! - Critical values are `b0 + b1/n + b2/n² + b3/n³` where `n` is the
//!   number of observations in the final regression.
use crate::statistical_tests::errors::{TestError, TestResult};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;

const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

const CRIT_1PCT: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5PCT: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10PCT: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Critical values of the ADF τ statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdfCriticalValues {
    #[serde(rename = "1%")]
    pub one_pct: f64,
    #[serde(rename = "5%")]
    pub five_pct: f64,
    #[serde(rename = "10%")]
    pub ten_pct: f64,
}

fn polyval(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Approximate p-value of a Dickey–Fuller τ statistic (constant only).
pub fn mackinnon_p_value(tau: f64) -> TestResult<f64> {
    if tau > TAU_MAX {
        return Ok(1.0);
    }
    if tau < TAU_MIN {
        return Ok(0.0);
    }
    let coefs: &[f64] = if tau <= TAU_STAR { &TAU_SMALL_P } else { &TAU_LARGE_P };
    let normal = Normal::new(0.0, 1.0).map_err(|e| TestError::Distribution(e.to_string()))?;
    Ok(normal.cdf(polyval(coefs, tau)))
}

/// Finite-sample critical values for a regression with `nobs` rows.
pub fn mackinnon_critical_values(nobs: usize) -> AdfCriticalValues {
    let inv_n = 1.0 / nobs as f64;
    AdfCriticalValues {
        one_pct: polyval(&CRIT_1PCT, inv_n),
        five_pct: polyval(&CRIT_5PCT, inv_n),
        ten_pct: polyval(&CRIT_10PCT, inv_n),
    }
}
