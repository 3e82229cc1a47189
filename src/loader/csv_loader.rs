//! loader::csv_loader — price and event tables from CSV files.
//!
//! Purpose
//! -------
//! Turn the two tabular inputs into validated crate types: a
//! [`PriceSeries`] from a `Date,Price` file and a list of [`EventRecord`]s
//! from an event catalogue.
//!
//! Key behaviors
//! -------------
//! - Prices: rows whose price cell is empty or not a finite number are
//!   dropped with a WARN. Rows are then sorted by date (stable, so the
//!   first row in file order wins among duplicates) and duplicate dates
//!   are dropped with a WARN. The survivors go through
//!   [`PriceSeries::new`], so non-positive prices remain fatal.
//! - Dates that match none of the accepted layouts are fatal
//!   ([`LoaderError::InvalidDate`]); a row is never silently re-dated.
//! - Events: `event_date`, `event_name` and `event_type` are required.
//!   `region_org`, `description`, `expected_impact` and
//!   `impact_direction` default to "Unknown", "", "" and "neutral" when
//!   the column is absent or the cell is empty. `id` defaults to the
//!   0-based row index.
//!
//! Conventions
//! -----------
//! - Header names are matched exactly after trimming whitespace.
use crate::events::records::EventRecord;
use crate::loader::dates::parse_date;
use crate::loader::errors::{LoaderError, LoaderResult};
use crate::series::PriceSeries;
use chrono::NaiveDate;
use csv::StringRecord;
use std::path::Path;
use tracing::{info, warn};

fn optional_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn column(headers: &StringRecord, name: &str) -> LoaderResult<usize> {
    optional_column(headers, name).ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
}

fn cell(record: &StringRecord, col: Option<usize>) -> Option<&str> {
    col.and_then(|c| record.get(c)).map(str::trim).filter(|s| !s.is_empty())
}

fn open(path: &Path) -> LoaderResult<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.display().to_string()));
    }
    Ok(csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?)
}

/// Load a `Date,Price` CSV into a validated [`PriceSeries`].
///
/// Errors
/// ------
/// - `FileNotFound`, `Io`, `Csv` for unreadable input.
/// - `MissingColumn` if `Date` or `Price` is absent.
/// - `InvalidDate` for a date cell in no accepted layout.
/// - `Series` if the cleaned rows fail series validation (e.g. a
///   non-positive price, or no rows left).
pub fn load_prices<P: AsRef<Path>>(path: P) -> LoaderResult<PriceSeries> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();
    let date_col = column(&headers, "Date")?;
    let price_col = column(&headers, "Price")?;

    let mut rows: Vec<(NaiveDate, f64)> = Vec::new();
    let mut dropped = 0usize;
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let Some(raw_date) = cell(&record, Some(date_col)) else {
            dropped += 1;
            continue;
        };
        let date = parse_date(raw_date)
            .ok_or_else(|| LoaderError::InvalidDate { row: idx + 1, value: raw_date.to_string() })?;
        match cell(&record, Some(price_col)).and_then(|p| p.parse::<f64>().ok()) {
            Some(price) if price.is_finite() => rows.push((date, price)),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(path = %path.display(), dropped, "removed rows with missing values");
    }

    rows.sort_by_key(|(date, _)| *date);
    let before = rows.len();
    rows.dedup_by_key(|(date, _)| *date);
    if rows.len() < before {
        warn!(path = %path.display(), dropped = before - rows.len(), "removed duplicate rows");
    }

    let (dates, prices): (Vec<NaiveDate>, Vec<f64>) = rows.into_iter().unzip();
    let series = PriceSeries::new(dates, prices)?;
    info!(path = %path.display(), records = series.len(), "loaded price records");
    Ok(series)
}

/// Load an event catalogue CSV.
///
/// Errors
/// ------
/// - `FileNotFound`, `Io`, `Csv` for unreadable input.
/// - `MissingColumn` if a required column is absent.
/// - `InvalidDate` for an unparseable `event_date`.
/// - `InvalidField` for an `id` cell that is not a non-negative integer.
pub fn load_events<P: AsRef<Path>>(path: P) -> LoaderResult<Vec<EventRecord>> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    let headers = reader.headers()?.clone();
    let date_col = column(&headers, "event_date")?;
    let name_col = column(&headers, "event_name")?;
    let type_col = column(&headers, "event_type")?;
    let id_col = optional_column(&headers, "id");
    let region_col = optional_column(&headers, "region_org");
    let description_col = optional_column(&headers, "description");
    let expected_col = optional_column(&headers, "expected_impact");
    let direction_col = optional_column(&headers, "impact_direction");

    let mut events = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;
        let raw_date = cell(&record, Some(date_col)).unwrap_or_default();
        let date = parse_date(raw_date)
            .ok_or_else(|| LoaderError::InvalidDate { row, value: raw_date.to_string() })?;
        let id = match cell(&record, id_col) {
            Some(raw) => raw.parse::<usize>().map_err(|_| LoaderError::InvalidField {
                row,
                column: "id",
                value: raw.to_string(),
            })?,
            None => idx,
        };

        let mut event = EventRecord::new(
            id,
            date,
            cell(&record, Some(name_col)).unwrap_or_default(),
            cell(&record, Some(type_col)).unwrap_or_default(),
        );
        if let Some(region) = cell(&record, region_col) {
            event.region = region.to_string();
        }
        if let Some(description) = cell(&record, description_col) {
            event.description = description.to_string();
        }
        if let Some(expected) = cell(&record, expected_col) {
            event.expected_impact = expected.to_string();
        }
        if let Some(direction) = cell(&record, direction_col) {
            event.impact_direction = direction.to_string();
        }
        events.push(event);
    }
    info!(path = %path.display(), events = events.len(), "loaded events");
    Ok(events)
}
