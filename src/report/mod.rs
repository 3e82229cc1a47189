//! report — composition of analyzers into consumable payloads.
//!
//! Purpose
//! -------
//! Own the immutable [`AnalysisContext`] and turn it into the payloads a
//! presentation layer consumes: the headline [`AnalysisReport`], the
//! [`FullAnalysis`] bundle, the filtered views and the plain-text summary.
//!
//! Key behaviors
//! -------------
//! - The context is built once (validation and derived columns up front)
//!   and only ever borrowed afterwards.
//! - Statistical test failures never propagate out of this layer; they
//!   become `None` fields, logged at WARN where they occur.
//! - Fatal errors here are limited to caller-supplied parameters: inverted
//!   date ranges and out-of-range probability thresholds.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every payload is `Send + Sync` and serializes with `serde`; absent
//!   values serialize as `null`.
//! - Report functions are deterministic: the same context and arguments
//!   give identical payloads.
//!
//! Downstream usage
//! ----------------
//! - Wrap the context in an `Arc` and call the report functions from any
//!   number of threads.
pub mod context;
pub mod summary;
pub mod text;
pub mod views;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::context::AnalysisContext;
pub use self::summary::{
    AnalysisReport, FullAnalysis, LatestSnapshot, ReturnStats, VolatilityStats, cumulative_return,
};
pub use self::text::render_summary_text;
pub use self::views::{
    ChangePointsView, EventTypesView, EventWithImpact, EventsView, PriceView, VolatilityView,
    change_points_view, event_types_view, events_view, price_view, volatility_view,
};
