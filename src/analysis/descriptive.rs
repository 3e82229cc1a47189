//! analysis::descriptive — moment and order statistics on plain slices.
//!
//! Purpose
//! -------
//! Shared building blocks for the trend, volatility, distribution and
//! summary analyzers. Every function takes the *defined* values of a column
//! (callers drop `None`s first) and returns `None` when the statistic is
//! not computable for that many observations.
//!
//! Conventions
//! -----------
//! - `sample_std` uses the `n − 1` denominator; `population_std` uses `n`.
//! - `skewness` is the bias-corrected `G1`; `excess_kurtosis` is the
//!   bias-corrected excess kurtosis `G2`. Both return `0.0` for a series
//!   with zero variance.
//! - Percentiles interpolate linearly between order statistics at rank
//!   `h = (n − 1)·p/100`, so the 50th percentile equals the median.
use serde::Serialize;

pub fn mean(data: &[f64]) -> Option<f64> {
    (!data.is_empty()).then(|| data.iter().sum::<f64>() / data.len() as f64)
}

pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

fn central_sums(data: &[f64], mean: f64) -> (f64, f64, f64) {
    data.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    })
}

pub fn median(data: &[f64]) -> Option<f64> {
    let v = sorted(data);
    let n = v.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(v[n / 2]),
        _ => Some((v[n / 2 - 1] + v[n / 2]) / 2.0),
    }
}

/// Sample standard deviation (`n − 1`); `None` for fewer than two values.
pub fn sample_std(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let (s2, _, _) = central_sums(data, m);
    Some((s2 / (data.len() - 1) as f64).sqrt())
}

/// Population standard deviation (`n`); `None` for an empty slice.
pub fn population_std(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let (s2, _, _) = central_sums(data, m);
    Some((s2 / data.len() as f64).sqrt())
}

/// Bias-corrected sample skewness `G1`; `None` for fewer than three values.
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let (s2, s3, _) = central_sums(data, mean(data)?);
    let (m2, m3) = (s2 / nf, s3 / nf);
    if m2 <= 0.0 {
        return Some(0.0);
    }
    Some((nf * (nf - 1.0)).sqrt() / (nf - 2.0) * m3 / m2.powf(1.5))
}

/// Bias-corrected excess kurtosis `G2`; `None` for fewer than four values.
pub fn excess_kurtosis(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let nf = n as f64;
    let (s2, _, s4) = central_sums(data, mean(data)?);
    if s2 <= 0.0 {
        return Some(0.0);
    }
    let scale = (nf - 2.0) * (nf - 3.0);
    Some(nf * (nf + 1.0) * (nf - 1.0) * s4 / (scale * s2 * s2) - 3.0 * (nf - 1.0).powi(2) / scale)
}

fn percentile_of_sorted(v: &[f64], p: f64) -> f64 {
    let h = (v.len() - 1) as f64 * p / 100.0;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(v.len() - 1);
    v[lo] + (h - lo as f64) * (v[hi] - v[lo])
}

/// Linear-interpolation percentile, `p ∈ [0, 100]`.
pub fn percentile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }
    Some(percentile_of_sorted(&sorted(data), p))
}

/// Percentile ladder at {1, 5, 25, 50, 75, 95, 99}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileLadder {
    pub p1: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    pub p99: f64,
}

impl PercentileLadder {
    pub fn from_data(data: &[f64]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let v = sorted(data);
        let at = |p| percentile_of_sorted(&v, p);
        Some(PercentileLadder {
            p1: at(1.0),
            p5: at(5.0),
            p25: at(25.0),
            p50: at(50.0),
            p75: at(75.0),
            p95: at(95.0),
            p99: at(99.0),
        })
    }
}

/// Mean / median / sample std / min / max of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    pub fn from_data(data: &[f64]) -> Option<Self> {
        Some(SummaryStats {
            mean: mean(data)?,
            median: median(data)?,
            std: sample_std(data),
            min: min(data)?,
            max: max(data)?,
        })
    }
}

/// Defined values of an optional column.
pub fn defined(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Moments against hand-computed values.
    // - Minimum-length guards and zero-variance behavior.
    // - Linear-interpolation percentiles and p50 == median.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify std conventions on a small sample.
    //
    // Given
    // -----
    // - [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, Σd² = 32.
    //
    // Expect
    // ------
    // - population std 2, sample std sqrt(32/7).
    fn std_conventions_match_textbook_example() {
        let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&x).unwrap(), 5.0);
        assert_relative_eq!(population_std(&x).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&x).unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(median(&x), Some(4.5));
    }

    #[test]
    // Purpose
    // -------
    // Check the bias-corrected skewness and kurtosis formulas.
    //
    // Given
    // -----
    // - [1, 2, 3, 10]: mean 4, d = [−3, −2, −1, 6], Σd² = 50, Σd³ = 180,
    //   Σd⁴ = 1394.
    //
    // Expect
    // ------
    // - m2 = 12.5, m3 = 45 → G1 = sqrt(12)/2 · 45/12.5^1.5.
    // - G2 = 4·5·3·1394/(2·1·2500) − 3·9/2 = 16.728 − 13.5 = 3.228.
    fn skewness_and_kurtosis_are_bias_corrected() {
        let x = [1.0, 2.0, 3.0, 10.0];
        let g1 = 12.0_f64.sqrt() / 2.0 * 45.0 / 12.5_f64.powf(1.5);
        assert_relative_eq!(skewness(&x).unwrap(), g1, epsilon = 1e-12);
        assert_relative_eq!(excess_kurtosis(&x).unwrap(), 3.228, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Short and constant inputs follow the documented guards.
    fn guards_for_short_and_constant_inputs() {
        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(excess_kurtosis(&[1.0, 2.0, 3.0]), None);
        assert_eq!(skewness(&[3.0; 5]), Some(0.0));
        assert_eq!(excess_kurtosis(&[3.0; 5]), Some(0.0));
        assert_eq!(mean(&[]), None);
        assert!(PercentileLadder::from_data(&[]).is_none());
    }

    #[test]
    // Purpose
    // -------
    // Percentiles interpolate between order statistics and p50 equals the
    // median for both odd and even lengths.
    //
    // Given
    // -----
    // - [10, 20, 30, 40]: p25 at rank 0.75 → 17.5.
    fn percentiles_interpolate_and_p50_is_median() {
        // Arrange
        let even = [40.0, 10.0, 30.0, 20.0];
        let odd = [5.0, 1.0, 9.0, 3.0, 7.0];

        // Act
        let ladder_even = PercentileLadder::from_data(&even).unwrap();
        let ladder_odd = PercentileLadder::from_data(&odd).unwrap();

        // Assert
        assert_relative_eq!(ladder_even.p25, 17.5, epsilon = 1e-12);
        assert_relative_eq!(ladder_even.p50, median(&even).unwrap(), max_relative = 1e-9);
        assert_relative_eq!(ladder_odd.p50, median(&odd).unwrap(), max_relative = 1e-9);
        assert_relative_eq!(ladder_even.p99, 39.7, epsilon = 1e-9);
        assert_eq!(percentile(&even, 101.0), None);
    }
}
