//! events::correlation — nearest-event attribution for change points.
//!
//! Purpose
//! -------
//! Attach to each change point the closest event in calendar days, provided
//! it lies within a tolerance.
//!
//! Key behaviors
//! -------------
//! - Distance is the absolute number of calendar days.
//! - The minimum distance wins; ties go to the earliest event date, then
//!   to the first such event in input order. The result is deterministic.
//! - Distance `≤ tolerance` correlates (inclusive); otherwise both
//!   `correlated_event` and `correlation_days` are `None`.
//! - An empty event list correlates nothing.
//!
//! Invariants & assumptions
//! ------------------------
//! - Change points are never created, dropped or modified here; the output
//!   carries each input change point unchanged.
use crate::events::records::{ChangePoint, CorrelatedChangePoint, EventRecord};
use chrono::NaiveDate;

/// Nearest event to `date` and its absolute distance in days.
pub fn nearest_event(date: NaiveDate, events: &[EventRecord]) -> Option<(&EventRecord, i64)> {
    events
        .iter()
        .map(|e| (e, (e.date - date).num_days().abs()))
        .reduce(|best, cand| {
            let better = cand.1 < best.1 || (cand.1 == best.1 && cand.0.date < best.0.date);
            if better { cand } else { best }
        })
}

/// Correlate one change point with the event list.
pub fn correlate_change_point(
    change_point: &ChangePoint, events: &[EventRecord], tolerance_days: i64,
) -> CorrelatedChangePoint {
    let hit = nearest_event(change_point.date, events).filter(|(_, days)| *days <= tolerance_days);
    CorrelatedChangePoint {
        change_point: change_point.clone(),
        correlated_event: hit.map(|(e, _)| e.name.clone()),
        correlation_days: hit.map(|(_, days)| days),
    }
}

/// Correlate every change point, preserving input order.
pub fn correlate_change_points(
    change_points: &[ChangePoint], events: &[EventRecord], tolerance_days: i64,
) -> Vec<CorrelatedChangePoint> {
    change_points.iter().map(|cp| correlate_change_point(cp, events, tolerance_days)).collect()
}
