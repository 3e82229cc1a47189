//! statistical_tests — hypothesis tests for price and return series.
//!
//! Purpose
//! -------
//! Collect the statistical-test routines used by the analyzers together
//! with their shared validation and error handling: ADF and KPSS for
//! stationarity, Ljung–Box for volatility clustering and Jarque–Bera for
//! normality.
//!
//! Key behaviors
//! -------------
//! - Each test is a constructor on its outcome type
//!   ([`AdfOutcome::adf`], [`KpssOutcome::kpss`],
//!   [`LjungBoxOutcome::ljung_box`], [`JarqueBeraOutcome::jarque_bera`])
//!   returning [`TestResult`].
//! - Input guards live in [`validate_series`]; non-finite statistics are
//!   rejected through [`validation::ensure_finite`].
//! - ADF p-values and critical values come from the MacKinnon response
//!   surfaces in [`mackinnon`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Tests never panic on user-facing invalid inputs; every failure is a
//!   [`TestError`].
//! - Outcomes are small `Copy` value objects that serialize directly into
//!   report payloads.
//!
//! Conventions
//! -----------
//! - `is_stationary` follows each test's null: ADF rejects a unit root
//!   (`p ≤ α`), KPSS fails to reject stationarity (`p ≥ α`).
//!
//! Downstream usage
//! ----------------
//! - `analysis::stationarity` and `analysis::volatility` call these tests
//!   and convert a [`TestError`] into an absent field with a warning, so a
//!   failing test never blanks the rest of a report.
//!
//! Testing notes
//! -------------
//! - Each test module checks hand-computable cases, degenerate inputs and
//!   the direction of its decision rule on synthetic series.

pub mod adf;
pub mod errors;
pub mod jarque_bera;
pub mod kpss;
pub mod ljung_box;
pub mod mackinnon;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::adf::AdfOutcome;
pub use self::errors::{TestError, TestResult};
pub use self::jarque_bera::JarqueBeraOutcome;
pub use self::kpss::KpssOutcome;
pub use self::ljung_box::LjungBoxOutcome;
pub use self::mackinnon::AdfCriticalValues;
pub use self::validation::validate_series;
