//! events — historical events, change points and their link to prices.
//!
//! Purpose
//! -------
//! Hold the typed event and change-point records and the computations that
//! relate them to a price series: windowed before/after impact, nearest-event
//! correlation for change points, and per-type event queries.
//!
//! Key behaviors
//! -------------
//! - [`calculate_event_impact`] returns `None` whenever either calendar
//!   window is empty.
//! - [`correlate_change_point`] attaches the nearest event within a
//!   tolerance with deterministic tie-breaking.
//! - Query helpers in [`queries`] filter events and change points and
//!   aggregate by event type.
//!
//! Invariants & assumptions
//! ------------------------
//! - Records are read-only; change points are never generated or edited.
//! - Window sizes and tolerances are calendar days.
//!
//! Downstream usage
//! ----------------
//! - `report` embeds impact reports in event payloads and correlated change
//!   points in the change-point payload.
pub mod correlation;
pub mod errors;
pub mod impact;
pub mod queries;
pub mod records;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::correlation::{correlate_change_point, correlate_change_points, nearest_event};
pub use self::errors::{EventError, EventResult};
pub use self::impact::{ImpactReport, calculate_event_impact};
pub use self::queries::{
    ALL_TYPES, EventTypeCount, EventTypeVolatility, event_type_distribution, event_type_volatility,
    filter_by_probability, filter_events,
};
pub use self::records::{ChangePoint, CorrelatedChangePoint, EventRecord};
