//! events::records — fixed-shape event and change-point records.
//!
//! Purpose
//! -------
//! Typed replacements for loosely-typed table rows: [`EventRecord`] for
//! dated historical events, [`ChangePoint`] for externally detected
//! structural breaks, and [`CorrelatedChangePoint`] for a change point with
//! its nearest-event correlation attached.
//!
//! Conventions
//! -----------
//! - Serialized field names follow the external payload contract (`type`
//!   for the event type, `region` for the region/organisation).
//! - Records are immutable values; nothing in the crate edits them after
//!   loading.
use crate::events::errors::{EventError, EventResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated historical event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: usize,
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub region: String,
    pub description: String,
    pub expected_impact: String,
    pub impact_direction: String,
}

impl EventRecord {
    /// Event with default region ("Unknown"), empty description and
    /// expected impact, and a "neutral" direction.
    pub fn new(id: usize, date: NaiveDate, name: impl Into<String>, event_type: impl Into<String>) -> Self {
        EventRecord {
            id,
            date,
            name: name.into(),
            event_type: event_type.into(),
            region: "Unknown".to_string(),
            description: String::new(),
            expected_impact: String::new(),
            impact_direction: "neutral".to_string(),
        }
    }
}

/// An externally detected change point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePoint {
    pub date: NaiveDate,
    /// Optional label attached by the detector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    pub probability: f64,
    pub mean_before: f64,
    pub mean_after: f64,
    pub impact_pct: f64,
}

impl ChangePoint {
    /// Validate and build a change point.
    ///
    /// Errors
    /// ------
    /// - `EventError::InvalidProbability` unless `0 ≤ probability ≤ 1`.
    pub fn new(
        date: NaiveDate, probability: f64, mean_before: f64, mean_after: f64, impact_pct: f64,
    ) -> EventResult<Self> {
        let cp = ChangePoint { date, event: None, probability, mean_before, mean_after, impact_pct };
        cp.validate()?;
        Ok(cp)
    }

    pub fn validate(&self) -> EventResult<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(EventError::InvalidProbability { date: self.date, probability: self.probability });
        }
        Ok(())
    }
}

/// A change point with its nearest-event correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedChangePoint {
    #[serde(flatten)]
    pub change_point: ChangePoint,
    pub correlated_event: Option<String>,
    pub correlation_days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Defaults for optional event columns and the `type` field name.
    fn event_record_defaults_and_field_names() {
        // Act
        let e = EventRecord::new(3, d(2020, 3, 9), "Price war", "OPEC");
        let json = serde_json::to_value(&e).unwrap();

        // Assert
        assert_eq!(e.region, "Unknown");
        assert_eq!(e.impact_direction, "neutral");
        assert_eq!(json["type"], "OPEC");
        assert_eq!(json["date"], "2020-03-09");
    }

    #[test]
    // Purpose
    // -------
    // Probabilities outside [0, 1] are rejected.
    fn change_point_probability_is_validated() {
        assert!(ChangePoint::new(d(2020, 1, 1), 0.9, 1.0, 2.0, 100.0).is_ok());
        assert!(matches!(
            ChangePoint::new(d(2020, 1, 1), 1.2, 1.0, 2.0, 100.0),
            Err(EventError::InvalidProbability { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Correlation fields serialize next to the original fields, null when
    // absent.
    fn correlated_change_point_flattens_original_fields() {
        // Arrange
        let cp = ChangePoint::new(d(2008, 9, 15), 0.99, 112.5, 68.4, -39.2).unwrap();
        let c = CorrelatedChangePoint { change_point: cp, correlated_event: None, correlation_days: None };

        // Act
        let json = serde_json::to_value(&c).unwrap();

        // Assert
        assert_eq!(json["probability"], 0.99);
        assert!(json["correlated_event"].is_null());
        assert!(json["correlation_days"].is_null());
        assert!(json.get("event").is_none());
    }
}
