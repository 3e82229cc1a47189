//! events::queries — filtering and per-type aggregation of events.
//!
//! Key behaviors
//! -------------
//! - [`filter_events`]: by type (`None` or `"all"` keeps every type) and by
//!   an inclusive [`DateRange`].
//! - [`event_type_distribution`]: count and share of each type, sorted by
//!   count descending then name ascending.
//! - [`event_type_volatility`]: per type, mean over its events of the mean
//!   rolling volatility in the before / after windows. Types lacking a
//!   value on either side are skipped. Types appear in first-seen order.
//! - [`filter_by_probability`]: change points with probability `≥ min`.
use crate::analysis::descriptive::{defined, mean};
use crate::events::impact::event_windows;
use crate::events::records::{ChangePoint, EventRecord};
use crate::series::{DateRange, PriceSeries};
use serde::Serialize;
use std::collections::BTreeMap;

/// Type filter value that disables filtering.
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTypeCount {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTypeVolatility {
    pub event_type: String,
    pub volatility_before: f64,
    pub volatility_after: f64,
    pub change: f64,
    /// `None` when the before-window volatility is zero.
    pub percent_change: Option<f64>,
}

pub fn filter_events<'a>(
    events: &'a [EventRecord], event_type: Option<&str>, range: Option<&DateRange>,
) -> Vec<&'a EventRecord> {
    let type_filter = event_type.filter(|t| *t != ALL_TYPES);
    events
        .iter()
        .filter(|e| type_filter.map_or(true, |t| t == e.event_type))
        .filter(|e| range.map_or(true, |r| r.contains(e.date)))
        .collect()
}

/// Distinct event types in first-seen order.
pub fn event_types(events: &[EventRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for e in events {
        if !seen.contains(&e.event_type) {
            seen.push(e.event_type.clone());
        }
    }
    seen
}

pub fn event_type_distribution(events: &[EventRecord]) -> Vec<EventTypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for e in events {
        *counts.entry(e.event_type.as_str()).or_default() += 1;
    }
    let total = events.len() as f64;
    let mut out: Vec<EventTypeCount> = counts
        .into_iter()
        .map(|(name, count)| EventTypeCount {
            name: name.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}

pub fn event_type_volatility(
    series: &PriceSeries, volatility: &[Option<f64>], events: &[EventRecord], before_days: i64,
    after_days: i64,
) -> Vec<EventTypeVolatility> {
    event_types(events)
        .into_iter()
        .filter_map(|event_type| {
            let (mut before, mut after) = (Vec::new(), Vec::new());
            for e in events.iter().filter(|e| e.event_type == event_type) {
                let (b, a) = event_windows(series, e.date, before_days, after_days);
                before.extend(volatility.get(b).and_then(|w| mean(&defined(w))));
                after.extend(volatility.get(a).and_then(|w| mean(&defined(w))));
            }
            let volatility_before = mean(&before)?;
            let volatility_after = mean(&after)?;
            let change = volatility_after - volatility_before;
            Some(EventTypeVolatility {
                event_type,
                volatility_before,
                volatility_after,
                change,
                percent_change: (volatility_before != 0.0).then(|| change / volatility_before * 100.0),
            })
        })
        .collect()
}

pub fn filter_by_probability(change_points: &[ChangePoint], min_probability: f64) -> Vec<ChangePoint> {
    change_points.iter().filter(|cp| cp.probability >= min_probability).cloned().collect()
}
