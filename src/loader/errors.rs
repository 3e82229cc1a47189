//! loader::errors — failures while reading price, event and change-point files.
//!
//! Conventions
//! -----------
//! - `row` payloads are 1-based data rows (the header line is not counted).
//! - Validation failures of the assembled series or records are wrapped
//!   unchanged so callers can match on the underlying variant.
use crate::{events::errors::EventError, series::errors::SeriesError};
use thiserror::Error;

pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unparseable date in row {row}: {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid value in row {row}, column `{column}`: {value:?}")]
    InvalidField { row: usize, column: &'static str, value: String },

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Event(#[from] EventError),
}
