//! loader::dates — calendar date parsing for the accepted input layouts.
//!
//! Accepted layouts, tried in order:
//! - `2020-04-22` (`%Y-%m-%d`)
//! - `20-May-87` (`%d-%b-%y`; two-digit years 69–99 map to 19xx, 00–68 to 20xx)
//! - `Apr 22, 2020` (`%b %d, %Y`)
use chrono::NaiveDate;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%b-%y", "%b %d, %Y"];

/// Parse a trimmed date cell; `None` if no layout matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
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
    // Every accepted layout parses to the same calendar day semantics.
    fn parses_all_layouts() {
        assert_eq!(parse_date("2020-04-22"), Some(d(2020, 4, 22)));
        assert_eq!(parse_date("20-May-87"), Some(d(1987, 5, 20)));
        assert_eq!(parse_date("02-Jan-01"), Some(d(2001, 1, 2)));
        assert_eq!(parse_date(" Apr 22, 2020 "), Some(d(2020, 4, 22)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2020-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }
}
