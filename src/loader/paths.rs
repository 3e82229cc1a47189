//! loader::paths — input file locations from the environment.
use std::{ffi::OsString, path::PathBuf};

pub const DEFAULT_DATA_PATH: &str = "./data/brent_oil_prices.csv";
pub const DEFAULT_EVENTS_PATH: &str = "./data/historical_events.csv";
pub const DEFAULT_CHANGE_POINTS_PATH: &str = "./data/change_points.json";

/// Locations of the three input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub prices: PathBuf,
    pub events: PathBuf,
    pub change_points: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            prices: PathBuf::from(DEFAULT_DATA_PATH),
            events: PathBuf::from(DEFAULT_EVENTS_PATH),
            change_points: PathBuf::from(DEFAULT_CHANGE_POINTS_PATH),
        }
    }
}

impl DataPaths {
    /// Resolve `DATA_PATH`, `EVENTS_PATH` and `CHANGE_POINTS_PATH`, falling
    /// back to the defaults for unset or empty variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let resolve = |key: &str, default: &str| {
            lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
        };
        DataPaths {
            prices: resolve("DATA_PATH", DEFAULT_DATA_PATH),
            events: resolve("EVENTS_PATH", DEFAULT_EVENTS_PATH),
            change_points: resolve("CHANGE_POINTS_PATH", DEFAULT_CHANGE_POINTS_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Set variables override their default; empty ones do not.
    fn lookup_overrides_defaults() {
        let paths = DataPaths::from_lookup(|key| match key {
            "DATA_PATH" => Some(OsString::from("/srv/prices.csv")),
            "EVENTS_PATH" => Some(OsString::new()),
            _ => None,
        });
        assert_eq!(paths.prices, PathBuf::from("/srv/prices.csv"));
        assert_eq!(paths.events, PathBuf::from(DEFAULT_EVENTS_PATH));
        assert_eq!(paths.change_points, PathBuf::from(DEFAULT_CHANGE_POINTS_PATH));
    }
}
