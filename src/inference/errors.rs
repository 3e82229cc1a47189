//! Unified error handling for regression and long-run variance routines.
//!
//! This module defines `InferenceError`, the error type used by the OLS
//! fitter and the kernel-weighted long-run variance estimator. These
//! failures are numerical rather than input-shape problems: a design
//! matrix that cannot be inverted, too few rows for the requested
//! regressors, or a variance estimate that collapses to zero. An alias
//! `InferenceResult<T>` standardizes the return type across the subtree.
use thiserror::Error;

/// Unified error type for inference routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    // ---- Regression ----
    /// Fewer observations than regressors (plus one residual degree of freedom).
    #[error("Inference Error: {nobs} observations cannot identify {regressors} regressors")]
    InsufficientObservations { nobs: usize, regressors: usize },

    /// Design and response lengths disagree.
    #[error("Inference Error: design has {rows} rows but response has {len} entries")]
    ShapeMismatch { rows: usize, len: usize },

    /// `XᵀX` is singular or too ill-conditioned to invert.
    #[error("Inference Error: singular design matrix (eigenvalue ratio {ratio:e})")]
    SingularDesign { ratio: f64 },

    // ---- Long-run variance ----
    /// Long-run variance is zero or negative.
    #[error("Inference Error: long-run variance {variance} is not strictly positive")]
    DegenerateVariance { variance: f64 },
}

pub type InferenceResult<T> = Result<T, InferenceError>;
