//! report::views — filtered payloads over an [`AnalysisContext`].
//!
//! Purpose
//! -------
//! Shape the context into the per-resource payloads a presentation layer
//! requests: the price view, the event list with embedded impact, the
//! change points with event correlation, the event-type breakdown and the
//! volatility overview.
//!
//! Key behaviors
//! -------------
//! - Price view: restrict to an inclusive date range (open bounds default
//!   to the series bounds), optionally resample, then recompute a 30-point
//!   moving average over the rows of the view itself.
//! - Events: filter by type and date range, attach an [`ImpactReport`] (or
//!   `null`) computed against the full series.
//! - Change points: keep those with probability ≥ the threshold (options
//!   default when none is given), then correlate with the full event list.
//!
//! Invariants & assumptions
//! ------------------------
//! - An inverted date range is rejected with
//!   `SeriesError::InvertedDateRange`; an empty but valid range yields
//!   empty payloads.
//! - Returns and volatility in the price view come from the full-series
//!   columns; restricting the range never recomputes them.
use crate::analysis::{YearlyVolatility, descriptive::defined, descriptive::mean, volatility::yearly_volatility};
use crate::errors::{AnalysisError, AnalysisResult};
use crate::events::{
    CorrelatedChangePoint, EventRecord, EventTypeCount, EventTypeVolatility, ImpactReport,
    calculate_event_impact, correlate_change_points, event_type_distribution, event_type_volatility,
    filter_by_probability, filter_events, queries::event_types,
};
use crate::report::context::AnalysisContext;
use crate::series::{DateRange, Frequency, ResampledRow, resample::resample, rolling::rolling_mean};
use chrono::NaiveDate;
use serde::Serialize;

/// Window of the moving average recomputed over the price view.
pub const VIEW_MA_WINDOW: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceViewMetadata {
    pub total_points: usize,
    pub date_range: DateRange,
    pub frequency: Frequency,
}

/// Column-oriented price history for one date range and frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceView {
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub returns: Vec<Option<f64>>,
    pub volatility: Vec<Option<f64>>,
    pub ma_30d: Vec<Option<f64>>,
    pub metadata: PriceViewMetadata,
}

/// Build the price view.
///
/// Errors
/// ------
/// - `SeriesError::InvertedDateRange` when `start > end` after defaults
///   are applied.
pub fn price_view(
    ctx: &AnalysisContext, start: Option<NaiveDate>, end: Option<NaiveDate>, frequency: Frequency,
) -> AnalysisResult<PriceView> {
    let series = ctx.series();
    let range = DateRange::with_defaults(start, end, series.date_range())?;
    let idx = series.range_indices(&range);
    let prices = series.prices().to_vec();

    let rows: Vec<ResampledRow> = resample(
        &series.dates()[idx.clone()],
        &prices[idx.clone()],
        &ctx.derived().returns()[idx.clone()],
        ctx.primary_volatility().get(idx).unwrap_or(&[]),
        frequency,
    );

    let view_prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    let as_optional: Vec<Option<f64>> = view_prices.iter().map(|&p| Some(p)).collect();
    tracing::debug!(start = %range.start, end = %range.end, ?frequency, points = rows.len(), "price view");
    Ok(PriceView {
        dates: rows.iter().map(|r| r.date).collect(),
        returns: rows.iter().map(|r| r.returns).collect(),
        volatility: rows.iter().map(|r| r.volatility).collect(),
        ma_30d: rolling_mean(&as_optional, VIEW_MA_WINDOW),
        metadata: PriceViewMetadata { total_points: rows.len(), date_range: range, frequency },
        prices: view_prices,
    })
}

/// An event with its price impact against the full series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventWithImpact {
    #[serde(flatten)]
    pub event: EventRecord,
    pub impact: Option<ImpactReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventFilters {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsView {
    pub events: Vec<EventWithImpact>,
    pub total: usize,
    /// Every distinct type in the catalogue, regardless of the filter.
    pub event_types: Vec<String>,
    pub filters: EventFilters,
}

/// Filtered events with embedded impact.
///
/// Errors
/// ------
/// - `SeriesError::InvertedDateRange` when both bounds are given and
///   `start > end`.
pub fn events_view(
    ctx: &AnalysisContext, event_type: Option<&str>, start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AnalysisResult<EventsView> {
    let range = match (start, end) {
        (None, None) => None,
        _ => Some(DateRange::with_defaults(start, end, DateRange { start: NaiveDate::MIN, end: NaiveDate::MAX })?),
    };
    let opts = ctx.options();
    let events: Vec<EventWithImpact> = filter_events(ctx.events(), event_type, range.as_ref())
        .into_iter()
        .map(|e| EventWithImpact {
            impact: calculate_event_impact(ctx.series(), e.date, opts.impact_window_before, opts.impact_window_after),
            event: e.clone(),
        })
        .collect();

    Ok(EventsView {
        total: events.len(),
        events,
        event_types: event_types(ctx.events()),
        filters: EventFilters { event_type: event_type.map(str::to_string), start, end },
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangePointsView {
    pub change_points: Vec<CorrelatedChangePoint>,
    pub total: usize,
    pub probability_threshold: f64,
}

/// Change points above a probability threshold, correlated with events.
///
/// Errors
/// ------
/// - `AnalysisError::InvalidOption` for a threshold outside `[0, 1]`.
pub fn change_points_view(ctx: &AnalysisContext, min_probability: Option<f64>) -> AnalysisResult<ChangePointsView> {
    let threshold = min_probability.unwrap_or(ctx.options().probability_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(AnalysisError::InvalidOption {
            field: "min_probability",
            reason: format!("{threshold} not in [0, 1]"),
        });
    }
    let kept = filter_by_probability(ctx.change_points(), threshold);
    let change_points = correlate_change_points(&kept, ctx.events(), ctx.options().correlation_tolerance_days);
    Ok(ChangePointsView { total: change_points.len(), change_points, probability_threshold: threshold })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTypesView {
    pub types: Vec<EventTypeCount>,
    pub total: usize,
}

pub fn event_types_view(ctx: &AnalysisContext) -> EventTypesView {
    EventTypesView { types: event_type_distribution(ctx.events()), total: ctx.events().len() }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityView {
    pub yearly_volatility: YearlyVolatility,
    pub event_volatility: Vec<EventTypeVolatility>,
    pub current_volatility: Option<f64>,
    pub historical_avg_volatility: Option<f64>,
}

pub fn volatility_view(ctx: &AnalysisContext) -> VolatilityView {
    let volatility = ctx.primary_volatility();
    let opts = ctx.options();
    VolatilityView {
        yearly_volatility: yearly_volatility(ctx.series(), volatility),
        event_volatility: event_type_volatility(
            ctx.series(),
            volatility,
            ctx.events(),
            opts.impact_window_before,
            opts.impact_window_after,
        ),
        current_volatility: volatility.iter().rev().flatten().next().copied(),
        historical_avg_volatility: mean(&defined(volatility)),
    }
}
