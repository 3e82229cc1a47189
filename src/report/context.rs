//! report::context — the immutable analysis snapshot.
//!
//! Purpose
//! -------
//! Own one validated price series, its derived columns, the event catalogue,
//! the change points and the options. It is built once and every report
//! function then borrows it. Share it across threads behind an `Arc`; no
//! method takes `&mut self`.
//!
//! Key behaviors
//! -------------
//! - [`AnalysisContext::new`] validates the options and every change point,
//!   then builds the derived columns. The primary volatility window is
//!   always among the materialized volatility windows.
//! - [`AnalysisContext::from_paths`] loads the three inputs through the
//!   `loader` helpers first.
use crate::analysis::AnalysisOptions;
use crate::errors::AnalysisResult;
use crate::events::{ChangePoint, EventRecord};
use crate::loader::{DataPaths, load_change_points, load_events, load_prices};
use crate::series::{DerivedSeries, PriceSeries};

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    series: PriceSeries,
    derived: DerivedSeries,
    events: Vec<EventRecord>,
    change_points: Vec<ChangePoint>,
    options: AnalysisOptions,
}

impl AnalysisContext {
    /// Validate inputs and build the derived columns.
    ///
    /// Errors
    /// ------
    /// - `AnalysisError::InvalidOption` / `Series(InvalidWindow)` for bad
    ///   options.
    /// - `AnalysisError::Event` for a change point with an out-of-range
    ///   probability.
    pub fn new(
        series: PriceSeries, events: Vec<EventRecord>, change_points: Vec<ChangePoint>,
        options: AnalysisOptions,
    ) -> AnalysisResult<Self> {
        options.validate()?;
        for cp in &change_points {
            cp.validate()?;
        }

        let mut volatility_windows = options.volatility_windows.clone();
        if !volatility_windows.contains(&options.primary_volatility_window) {
            volatility_windows.push(options.primary_volatility_window);
        }
        let derived = DerivedSeries::build(
            &series,
            &options.ma_windows,
            &volatility_windows,
            options.periods_per_year,
        )?;

        tracing::info!(
            observations = series.len(),
            start = %series.first_date(),
            end = %series.last_date(),
            events = events.len(),
            change_points = change_points.len(),
            "analysis context ready"
        );
        Ok(AnalysisContext { series, derived, events, change_points, options })
    }

    /// Load prices, events and change points from `paths`, then build.
    pub fn from_paths(paths: &DataPaths, options: AnalysisOptions) -> AnalysisResult<Self> {
        let series = load_prices(&paths.prices)?;
        let events = load_events(&paths.events)?;
        let change_points = load_change_points(&paths.change_points)?;
        Self::new(series, events, change_points, options)
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn derived(&self) -> &DerivedSeries {
        &self.derived
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn change_points(&self) -> &[ChangePoint] {
        &self.change_points
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Rolling volatility for the primary window.
    pub fn primary_volatility(&self) -> &[Option<f64>] {
        self.derived.volatility(self.options.primary_volatility_window).unwrap_or(&[])
    }
}
