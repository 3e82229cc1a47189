//! commodity_timeseries — trend, volatility, distribution and event diagnostics
//! for daily commodity price series.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, behind the
//! `python-bindings` feature, as the PyO3 bridge exposing the headline
//! analysis to Python via the `_commodity_timeseries` extension module.
//!
//! Key behaviors
//! -------------
//! - `series` validates raw observations and derives returns, moving
//!   averages and rolling annualized volatility.
//! - `statistical_tests` implements ADF, KPSS, Ljung–Box and Jarque–Bera on
//!   top of the regression and long-run-variance kernels in `inference`.
//! - `analysis` turns a series into stationarity, trend, volatility and
//!   distribution reports.
//! - `events` relates historical events and externally detected change
//!   points to the price path.
//! - `loader` reads the CSV/JSON inputs; `report` composes everything over
//!   an immutable [`AnalysisContext`](report::AnalysisContext).
//!
//! Invariants & assumptions
//! ------------------------
//! - Every computation is a pure function of borrowed, immutable inputs.
//!   Nothing in the crate holds global state, so concurrent callers need no
//!   locking.
//! - Fatal input problems surface as errors before any analysis runs;
//!   statistics that cannot be computed are `None`.
//!
//! Conventions
//! -----------
//! - Returns are percentage log returns; volatility is annualized with
//!   `√periods_per_year` and therefore also in percent.
//! - Errors are rich `thiserror` enums internally and become `PyErr`
//!   values only at the PyO3 boundary.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` holds the end-to-end
//!   pipeline over loaded files.

pub mod analysis;
pub mod errors;
pub mod events;
pub mod inference;
pub mod loader;
pub mod report;
pub mod series;
pub mod statistical_tests;
pub mod utils;

pub use crate::errors::{AnalysisError, AnalysisResult};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::AnalysisOptions,
    report::{AnalysisContext, AnalysisReport, FullAnalysis, render_summary_text},
    series::PriceSeries,
    utils::{extract_f64_array, parse_date_strings},
};

/// PriceAnalysis — Python-facing handle on an analysis context.
///
/// Purpose
/// -------
/// Validate a price history once and serve the headline summary, the full
/// analysis bundle and the text report as JSON / text.
///
/// Parameters
/// ----------
/// Constructed from Python via `PriceAnalysis(dates, prices, options=None)`:
/// - `dates`: sequence of date strings in any layout the loader accepts.
/// - `prices`: 1-D array-like of positive finite floats, same length.
/// - `options`: optional JSON object overriding `AnalysisOptions` fields.
///
/// Notes
/// -----
/// - Events and change points are not part of this wrapper; the JSON
///   summary reports zero of each.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "commodity_timeseries", frozen)]
pub struct PriceAnalysis {
    inner: AnalysisContext,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PriceAnalysis {
    #[new]
    #[pyo3(text_signature = "(dates, prices, /, options=None)", signature = (dates, prices, options = None))]
    pub fn new<'py>(
        py: Python<'py>, dates: Vec<String>, prices: &Bound<'py, PyAny>, options: Option<&str>,
    ) -> PyResult<Self> {
        let arr = extract_f64_array(py, prices)?;
        let prices: Vec<f64> = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("prices must be contiguous"))?
            .to_vec();
        let dates = parse_date_strings(&dates)?;
        let options = match options {
            Some(raw) => AnalysisOptions::from_json_str(raw)?,
            None => AnalysisOptions::default(),
        };
        let series = PriceSeries::new(dates, prices).map_err(AnalysisError::from)?;
        let inner = AnalysisContext::new(series, Vec::new(), Vec::new(), options)?;
        Ok(PriceAnalysis { inner })
    }

    /// Headline summary as a JSON string.
    pub fn summary_json(&self) -> PyResult<String> {
        let report = AnalysisReport::from_context(&self.inner)?;
        Ok(serde_json::to_string(&report).map_err(AnalysisError::from)?)
    }

    /// Stationarity, trend, volatility and distribution as a JSON string.
    pub fn full_analysis_json(&self) -> PyResult<String> {
        let full = FullAnalysis::run(&self.inner);
        Ok(serde_json::to_string(&full).map_err(AnalysisError::from)?)
    }

    /// Plain-text analysis summary.
    pub fn summary_text(&self) -> String {
        render_summary_text(self.inner.series(), &FullAnalysis::run(&self.inner))
    }

    #[getter]
    pub fn observations(&self) -> usize {
        self.inner.series().len()
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _commodity_timeseries(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PriceAnalysis>()?;
    Ok(())
}
