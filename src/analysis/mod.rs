//! analysis — analyzers over a validated price series.
//!
//! Purpose
//! -------
//! Turn a [`PriceSeries`](crate::series::PriceSeries) and its
//! [`DerivedSeries`](crate::series::DerivedSeries) into structured,
//! serializable findings: stationarity, trend, volatility and distribution.
//!
//! Key behaviors
//! -------------
//! - Each analyzer is a free function over borrowed inputs plus
//!   [`AnalysisOptions`]; none holds state between calls.
//! - "Not computable" is an absent (`None`) field; a failing hypothesis
//!   test is logged at WARN and absent; nothing in this subtree returns an
//!   error once inputs are validated.
//!
//! Invariants & assumptions
//! ------------------------
//! - All report types are `Send + Sync` plain data.
//! - Undefined derived values are dropped before any statistic is taken.
//!
//! Downstream usage
//! ----------------
//! - `report` composes these analyzers into the summary and full-analysis
//!   payloads; callers may also use them individually.
//!
//! Testing notes
//! -------------
//! - Per-analyzer unit tests cover thresholds and guards; end-to-end
//!   scenarios live in `tests/integration_analysis_pipeline.rs`.
pub mod descriptive;
pub mod distribution;
pub mod options;
pub mod stationarity;
pub mod trend;
pub mod volatility;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::descriptive::{PercentileLadder, SummaryStats};
pub use self::distribution::{DistributionReport, DistributionStats, analyze_distribution};
pub use self::options::AnalysisOptions;
pub use self::stationarity::{StationarityReport, test_stationarity};
pub use self::trend::{LinearTrend, RollingWindowStats, TrendReport, YearlyStats, analyze_trends};
pub use self::volatility::{
    Regime, VolatilityClustering, VolatilityRegime, VolatilityReport, VolatilitySummary,
    YearlyVolatility, analyze_volatility, classify_regime,
};
