//! inference::ols — ordinary least squares via symmetric eigendecomposition.
//!
//! Purpose
//! -------
//! Fit `y = Xβ + ε` for the small auxiliary regressions used by unit-root
//! tests, returning coefficients, classical standard errors, the residual
//! sum of squares and the Gaussian log-likelihood needed for AIC-based lag
//! selection.
//!
//! Key behaviors
//! -------------
//! - Form `XᵀX` and `Xᵀy` in `ndarray`, copy `XᵀX` into a
//!   `nalgebra::DMatrix` and solve through `symmetric_eigen`:
//!   `β = Σ_k q_k (q_kᵀ Xᵀy) / λ_k`.
//! - Classical variances `Var(β̂_i) = s² Σ_k Q[i,k]² / λ_k` with
//!   `s² = SSR / (n − k)`.
//! - Reject designs whose smallest-to-largest eigenvalue ratio falls below
//!   [`CONDITION_EPS`]; no pseudoinverse fallback is attempted because a
//!   rank-deficient ADF regression has no meaningful test statistic.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x` is `n×k` with `n > k ≥ 1` and `y.len() == n`.
//! - All inputs are finite; callers build `x` from validated prices.
//!
//! Conventions
//! -----------
//! - Log-likelihood follows the concentrated Gaussian form
//!   `ℓ = −n/2 · (ln 2π + ln(SSR/n) + 1)`.
//! - `AIC = −2ℓ + 2k`, counting every column of `x` (including the
//!   intercept) as a parameter.
use crate::inference::errors::{InferenceError, InferenceResult};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Relative eigenvalue cutoff below which `XᵀX` is treated as singular.
pub const CONDITION_EPS: f64 = 1e-12;

/// Result of an OLS fit.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub coefficients: Array1<f64>,
    pub std_errors: Array1<f64>,
    pub ssr: f64,
    pub nobs: usize,
}

impl OlsFit {
    /// Number of regressors.
    pub fn k(&self) -> usize {
        self.coefficients.len()
    }

    /// t-statistic of coefficient `i`, `β̂_i / SE(β̂_i)`.
    pub fn t_stat(&self, i: usize) -> f64 {
        self.coefficients[i] / self.std_errors[i]
    }

    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -n / 2.0 * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.k() as f64
    }
}

/// fit_ols — least-squares fit of `y` on the columns of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&Array2<f64>`
///   Design matrix, one row per observation.
/// - `y`: `&Array1<f64>`
///   Response vector aligned with the rows of `x`.
///
/// Returns
/// -------
/// `InferenceResult<OlsFit>`
///
/// Errors
/// ------
/// - `ShapeMismatch` when `x.nrows() != y.len()`.
/// - `InsufficientObservations` when `n ≤ k`.
/// - `SingularDesign` when `λ_min / λ_max < CONDITION_EPS`.
pub fn fit_ols(x: &Array2<f64>, y: &Array1<f64>) -> InferenceResult<OlsFit> {
    let (nobs, k) = x.dim();
    if nobs != y.len() {
        return Err(InferenceError::ShapeMismatch { rows: nobs, len: y.len() });
    }
    if k == 0 || nobs <= k {
        return Err(InferenceError::InsufficientObservations { nobs, regressors: k });
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);
    let eigen = DMatrix::<f64>::from_fn(k, k, |i, j| xtx[[i, j]]).symmetric_eigen();
    let q = eigen.eigenvectors;
    let lambdas = eigen.eigenvalues;

    let lambda_max = lambdas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lambda_min = lambdas.iter().copied().fold(f64::INFINITY, f64::min);
    let ratio = if lambda_max > 0.0 { lambda_min / lambda_max } else { 0.0 };
    if !(ratio >= CONDITION_EPS) {
        return Err(InferenceError::SingularDesign { ratio });
    }

    let mut coefficients = Array1::<f64>::zeros(k);
    for (col, &lambda) in lambdas.iter().enumerate() {
        let proj: f64 = (0..k).map(|j| q[(j, col)] * xty[j]).sum::<f64>() / lambda;
        for i in 0..k {
            coefficients[i] += q[(i, col)] * proj;
        }
    }

    let resid = y - &x.dot(&coefficients);
    let ssr = resid.dot(&resid);
    let sigma2 = ssr / (nobs - k) as f64;
    let std_errors = Array1::from_shape_fn(k, |i| {
        let diag: f64 = lambdas.iter().enumerate().map(|(c, &l)| q[(i, c)] * q[(i, c)] / l).sum();
        (sigma2 * diag).sqrt()
    });

    Ok(OlsFit { coefficients, std_errors, ssr, nobs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of coefficients for a noiseless line.
    // - Standard errors against the closed-form simple-regression formula.
    // - Singular and under-identified designs.
    //
    // They intentionally DO NOT cover:
    // - ADF-specific design construction (see statistical_tests::adf).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a noiseless line is recovered exactly.
    //
    // Given
    // -----
    // - y = 2 + 3x for x = 0..5, design [1, x].
    //
    // Expect
    // ------
    // - β ≈ [2, 3], SSR ≈ 0.
    fn fit_ols_recovers_noiseless_line() {
        // Arrange
        let x = Array2::from_shape_fn((6, 2), |(i, j)| if j == 0 { 1.0 } else { i as f64 });
        let y = Array1::from_shape_fn(6, |i| 2.0 + 3.0 * i as f64);

        // Act
        let fit = fit_ols(&x, &y).unwrap();

        // Assert
        assert_relative_eq!(fit.coefficients[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.coefficients[1], 3.0, epsilon = 1e-9);
        assert!(fit.ssr < 1e-18);
        assert_eq!(fit.k(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Check the slope standard error against `sqrt(s² / Sxx)`.
    //
    // Given
    // -----
    // - x = [0, 1, 2, 3], y = [1, 3, 2, 5].
    //
    // Expect
    // ------
    // - slope = 1.1, intercept = 1.1, SSR = 2.7, s² = 1.35, Sxx = 5,
    //   SE(slope) = sqrt(0.27).
    fn fit_ols_slope_standard_error_matches_closed_form() {
        // Arrange
        let x = array![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = array![1.0, 3.0, 2.0, 5.0];

        // Act
        let fit = fit_ols(&x, &y).unwrap();

        // Assert
        assert_relative_eq!(fit.coefficients[1], 1.1, epsilon = 1e-10);
        assert_relative_eq!(fit.coefficients[0], 1.1, epsilon = 1e-10);
        assert_relative_eq!(fit.ssr, 2.7, epsilon = 1e-10);
        assert_relative_eq!(fit.std_errors[1], 0.27_f64.sqrt(), epsilon = 1e-10);
        assert_relative_eq!(fit.t_stat(1), 1.1 / 0.27_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Ensure collinear columns are rejected instead of producing garbage.
    //
    // Given
    // -----
    // - Second column is twice the first.
    //
    // Expect
    // ------
    // - `SingularDesign`.
    fn fit_ols_collinear_design_is_singular() {
        // Arrange
        let x = array![[1.0, 2.0], [1.0, 2.0], [1.0, 2.0], [1.0, 2.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];

        // Act
        let result = fit_ols(&x, &y);

        // Assert
        assert!(matches!(result, Err(InferenceError::SingularDesign { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify that n ≤ k and mismatched shapes are reported.
    fn fit_ols_rejects_underidentified_and_mismatched_inputs() {
        let x = array![[1.0, 0.0], [1.0, 1.0]];
        let y = array![1.0, 2.0];
        assert_eq!(
            fit_ols(&x, &y),
            Err(InferenceError::InsufficientObservations { nobs: 2, regressors: 2 })
        );

        let y_short = array![1.0];
        assert_eq!(fit_ols(&x, &y_short), Err(InferenceError::ShapeMismatch { rows: 2, len: 1 }));
    }

    #[test]
    // Purpose
    // -------
    // AIC must penalize each extra regressor by 2 at equal SSR.
    fn aic_counts_every_regressor() {
        let a = OlsFit { coefficients: array![1.0], std_errors: array![1.0], ssr: 4.0, nobs: 10 };
        let b = OlsFit {
            coefficients: array![1.0, 0.0],
            std_errors: array![1.0, 1.0],
            ssr: 4.0,
            nobs: 10,
        };
        assert_relative_eq!(b.aic() - a.aic(), 2.0, epsilon = 1e-12);
    }
}
