//! loader — boundary helpers that read input files into crate types.
//!
//! Purpose
//! -------
//! Keep file formats and their cleaning rules out of the analysis code.
//! Everything downstream of this module works on validated
//! [`PriceSeries`](crate::series::PriceSeries), [`EventRecord`]s and
//! [`ChangePoint`]s.
//!
//! Key behaviors
//! -------------
//! - [`load_prices`]: `Date,Price` CSV with row cleaning (blank prices and
//!   duplicate dates dropped with a WARN), then strict series validation.
//! - [`load_events`]: event catalogue CSV with defaults for optional
//!   columns.
//! - [`load_change_points`]: JSON array; a missing file yields an empty
//!   list.
//! - [`DataPaths::from_env`]: file locations from `DATA_PATH`,
//!   `EVENTS_PATH` and `CHANGE_POINTS_PATH`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Loaders never invent observations. Repairs are limited to dropping
//!   rows, and every drop is logged.
//!
//! Testing notes
//! -------------
//! - Tests write fixtures into `tempfile` directories.
//!
//! [`EventRecord`]: crate::events::EventRecord
//! [`ChangePoint`]: crate::events::ChangePoint
pub mod change_points;
pub mod csv_loader;
pub mod dates;
pub mod errors;
pub mod paths;

pub use self::change_points::{change_points_from_json_str, load_change_points};
pub use self::csv_loader::{load_events, load_prices};
pub use self::dates::parse_date;
pub use self::errors::{LoaderError, LoaderResult};
pub use self::paths::DataPaths;
