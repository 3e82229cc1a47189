//! analysis::options — tunable parameters for every analyzer.
//!
//! Purpose
//! -------
//! Collect the window sizes, thresholds and annualization constant used
//! across the crate in one validated value, so analyzers never hard-code
//! them and call sites pass explicit configuration instead of ad-hoc flags.
//!
//! Key behaviors
//! -------------
//! - `Default` reproduces the standard daily-data setup: MA and volatility
//!   windows of 30/90/365 observations, a 30-observation primary
//!   volatility window, 252 periods per year, Ljung–Box lag 10, 5%
//!   significance, a Bartlett KPSS taper, regime thresholds 1.2/0.8, a 30-day correlation
//!   tolerance, 30/30-day impact windows and a 0.8 change-point
//!   probability threshold.
//! - [`AnalysisOptions::from_json_str`] reads a (possibly partial) JSON
//!   object; missing fields take their defaults. The result is validated.
//!
//! Invariants & assumptions
//! ------------------------
//! - After [`AnalysisOptions::validate`] succeeds: no window is zero,
//!   `0 < significance < 1`, `0 ≤ regime_low ≤ regime_high`,
//!   `periods_per_year > 0`, the clustering lag is positive, day windows
//!   lie in `0..=MAX_DAY_WINDOW` and the probability threshold lies in
//!   `[0, 1]`.
use crate::errors::{AnalysisError, AnalysisResult};
use crate::inference::KernelType;
use crate::series::{TRADING_DAYS_PER_YEAR, errors::SeriesError, validation::validate_windows};
use serde::{Deserialize, Serialize};

/// Largest accepted calendar-day window (tolerance and impact windows).
pub const MAX_DAY_WINDOW: i64 = 36_500;

/// Configuration shared by all analyzers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    pub ma_windows: Vec<usize>,
    pub volatility_windows: Vec<usize>,
    pub primary_volatility_window: usize,
    pub periods_per_year: f64,
    pub clustering_lag: usize,
    pub significance: f64,
    /// Long-run variance taper for KPSS.
    pub kpss_kernel: KernelType,
    pub regime_high: f64,
    pub regime_low: f64,
    pub correlation_tolerance_days: i64,
    pub impact_window_before: i64,
    pub impact_window_after: i64,
    pub probability_threshold: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            ma_windows: vec![30, 90, 365],
            volatility_windows: vec![30, 90, 365],
            primary_volatility_window: 30,
            periods_per_year: TRADING_DAYS_PER_YEAR,
            clustering_lag: 10,
            significance: 0.05,
            kpss_kernel: KernelType::Bartlett,
            regime_high: 1.2,
            regime_low: 0.8,
            correlation_tolerance_days: 30,
            impact_window_before: 30,
            impact_window_after: 30,
            probability_threshold: 0.8,
        }
    }
}

impl AnalysisOptions {
    /// Build options from explicit windows, keeping every other field at
    /// its default, and validate them.
    pub fn new(ma_windows: Vec<usize>, volatility_windows: Vec<usize>) -> AnalysisResult<Self> {
        let primary_volatility_window = volatility_windows.first().copied().unwrap_or(30);
        let opts = AnalysisOptions {
            ma_windows,
            volatility_windows,
            primary_volatility_window,
            ..AnalysisOptions::default()
        };
        opts.validate()?;
        Ok(opts)
    }

    /// Parse a JSON object of overrides and validate the result.
    pub fn from_json_str(raw: &str) -> AnalysisResult<Self> {
        let opts: AnalysisOptions = serde_json::from_str(raw)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check every field against its admissible range.
    ///
    /// Errors
    /// ------
    /// - `AnalysisError::Series(InvalidWindow)` for a zero window.
    /// - `AnalysisError::InvalidOption` for any other out-of-range value.
    pub fn validate(&self) -> AnalysisResult<()> {
        validate_windows(&self.ma_windows)?;
        validate_windows(&self.volatility_windows)?;
        if self.primary_volatility_window == 0 {
            return Err(SeriesError::InvalidWindow { window: 0 }.into());
        }
        if !(self.periods_per_year > 0.0 && self.periods_per_year.is_finite()) {
            return Err(invalid("periods_per_year", format!("{} must be positive", self.periods_per_year)));
        }
        if self.clustering_lag == 0 {
            return Err(invalid("clustering_lag", "must be at least 1".to_string()));
        }
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(invalid("significance", format!("{} not in (0, 1)", self.significance)));
        }
        if !(self.regime_low >= 0.0 && self.regime_low <= self.regime_high && self.regime_high.is_finite()) {
            return Err(invalid(
                "regime_high",
                format!("thresholds must satisfy 0 ≤ low ({}) ≤ high ({})", self.regime_low, self.regime_high),
            ));
        }
        for (field, days) in [
            ("correlation_tolerance_days", self.correlation_tolerance_days),
            ("impact_window_before", self.impact_window_before),
            ("impact_window_after", self.impact_window_after),
        ] {
            if !(0..=MAX_DAY_WINDOW).contains(&days) {
                return Err(invalid(field, format!("{days} not in [0, {MAX_DAY_WINDOW}]")));
            }
        }
        if !(0.0..=1.0).contains(&self.probability_threshold) {
            return Err(invalid(
                "probability_threshold",
                format!("{} not in [0, 1]", self.probability_threshold),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> AnalysisError {
    AnalysisError::InvalidOption { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Documented defaults.
    // - Partial JSON overrides and unknown-field rejection.
    // - Range validation for windows and thresholds.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Defaults must match the documented daily-data configuration.
    fn default_options_are_valid_and_documented() {
        // Act
        let o = AnalysisOptions::default();

        // Assert
        assert!(o.validate().is_ok());
        assert_eq!(o.ma_windows, vec![30, 90, 365]);
        assert_eq!(o.primary_volatility_window, 30);
        assert_eq!(o.periods_per_year, 252.0);
        assert_eq!(o.correlation_tolerance_days, 30);
        assert_eq!((o.regime_high, o.regime_low), (1.2, 0.8));
    }

    #[test]
    // Purpose
    // -------
    // A partial JSON object overrides only the named fields.
    //
    // Given
    // -----
    // - {"ma_windows": [5], "significance": 0.01}.
    //
    // Expect
    // ------
    // - Those two fields change; the tolerance stays at 30.
    fn from_json_str_applies_partial_overrides() {
        // Act
        let o = AnalysisOptions::from_json_str(r#"{"ma_windows": [5], "significance": 0.01}"#).unwrap();

        // Assert
        assert_eq!(o.ma_windows, vec![5]);
        assert_eq!(o.significance, 0.01);
        assert_eq!(o.correlation_tolerance_days, 30);
        assert_eq!(o.kpss_kernel, KernelType::Bartlett);

        let qs = AnalysisOptions::from_json_str(r#"{"kpss_kernel": "quadratic_spectral"}"#).unwrap();
        assert_eq!(qs.kpss_kernel, KernelType::QuadraticSpectral);
    }

    #[test]
    // Purpose
    // -------
    // Malformed or out-of-range configuration is rejected.
    fn invalid_configuration_is_rejected() {
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"volatility_windows": [0]}"#),
            Err(AnalysisError::Series(SeriesError::InvalidWindow { window: 0 }))
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"significance": 1.5}"#),
            Err(AnalysisError::InvalidOption { field: "significance", .. })
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"unknown": 1}"#),
            Err(AnalysisError::Config(_))
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"regime_low": 2.0}"#),
            Err(AnalysisError::InvalidOption { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Day windows are bounded on both sides.
    //
    // Given
    // -----
    // - impact_window_after = i64::MAX, impact_window_before = -1,
    //   correlation_tolerance_days = MAX_DAY_WINDOW.
    //
    // Expect
    // ------
    // - The first two are rejected by field name; the bound itself is accepted.
    fn day_windows_are_bounded() {
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"impact_window_after": 9223372036854775807}"#),
            Err(AnalysisError::InvalidOption { field: "impact_window_after", .. })
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str(r#"{"impact_window_before": -1}"#),
            Err(AnalysisError::InvalidOption { field: "impact_window_before", .. })
        ));
        let edge = AnalysisOptions::from_json_str(r#"{"correlation_tolerance_days": 36500}"#).unwrap();
        assert_eq!(edge.correlation_tolerance_days, MAX_DAY_WINDOW);
    }

    #[test]
    // Purpose
    // -------
    // `new` takes the first volatility window as the primary one.
    fn new_uses_first_volatility_window_as_primary() {
        let o = AnalysisOptions::new(vec![10], vec![20, 60]).unwrap();
        assert_eq!(o.primary_volatility_window, 20);
        assert!(AnalysisOptions::new(vec![0], vec![20]).is_err());
    }
}
