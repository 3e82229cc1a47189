//! inference — regression and long-run variance primitives for the tests.
//!
//! Purpose
//! -------
//! Supply the numerical building blocks shared by the unit-root and
//! stationarity tests in `statistical_tests`: an OLS fitter with classical
//! standard errors and AIC, and kernel-weighted long-run variance with an
//! automatic bandwidth rule.
//!
//! Key behaviors
//! -------------
//! - [`fit_ols`] solves the normal equations through a symmetric
//!   eigendecomposition of `XᵀX` and refuses near-singular designs.
//! - [`long_run_variance`] applies a [`KernelType`] taper to sample
//!   autocovariances; [`hobijn_bandwidth`] picks the lag truncation used
//!   by KPSS.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite and already validated upstream.
//! - All routines return [`InferenceError`] on failure rather than
//!   panicking.
//!
//! Conventions
//! -----------
//! - Functions are pure: no logging, no global state, no `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::adf` uses [`fit_ols`] for lag selection and the
//!   final regression.
//! - `statistical_tests::kpss` uses [`hobijn_bandwidth`] and
//!   [`long_run_variance`].
pub mod errors;
pub mod kernel;
pub mod ols;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{InferenceError, InferenceResult};
pub use self::kernel::{KernelType, hobijn_bandwidth, long_run_variance};
pub use self::ols::{OlsFit, fit_ols};
