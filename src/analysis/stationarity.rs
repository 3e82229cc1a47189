//! analysis::stationarity — paired ADF / KPSS evaluation.
//!
//! Runs both tests on one series independently. A failing test is logged at
//! WARN and reported as `None`; the other test is unaffected.
use crate::inference::KernelType;
use crate::statistical_tests::{AdfOutcome, KpssOutcome, TestResult};
use serde::Serialize;

/// Stationarity results for one named series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationarityReport {
    pub series_name: String,
    pub adf: Option<AdfOutcome>,
    pub kpss: Option<KpssOutcome>,
}

/// Convert a test result into an optional field, logging the failure.
pub(crate) fn absorb<T>(result: TestResult<T>, test: &'static str, series: &str) -> Option<T> {
    match result {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            tracing::warn!(test, series, error = %err, "statistical test failed; field omitted");
            None
        }
    }
}

/// Run ADF and KPSS on `data` (undefined values already dropped). `kernel`
/// is the KPSS long-run variance taper.
pub fn test_stationarity(
    data: &[f64], series_name: &str, significance: f64, kernel: KernelType,
) -> StationarityReport {
    tracing::info!(series = series_name, n = data.len(), "testing stationarity");
    StationarityReport {
        series_name: series_name.to_string(),
        adf: absorb(AdfOutcome::adf(data, significance), "adf", series_name),
        kpss: absorb(KpssOutcome::kpss_with_kernel(data, significance, kernel), "kpss", series_name),
    }
}
