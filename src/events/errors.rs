//! Error type for event and change-point records.
use chrono::NaiveDate;
use thiserror::Error;

pub type EventResult<T> = Result<T, EventError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    /// Change-point probability outside `[0, 1]`.
    #[error("Event Error: change point {date} has probability {probability} outside [0, 1]")]
    InvalidProbability { date: NaiveDate, probability: f64 },
}
