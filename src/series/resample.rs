//! series::resample — calendar downsampling of aligned columns.
//!
//! Purpose
//! -------
//! Aggregate daily observations into weekly or monthly bins for the price
//! view. Each bin reports the mean of price and the mean of the *defined*
//! values of the return and volatility columns.
//!
//! Conventions
//! -----------
//! - Weekly bins end on Sunday and are labelled with that Sunday.
//! - Monthly bins are labelled with the last calendar day of the month.
//! - Bins without observations are omitted rather than emitted as empty
//!   rows.
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output frequency of the price view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "d" => Ok(Frequency::Daily),
            "weekly" | "w" => Ok(Frequency::Weekly),
            "monthly" | "m" => Ok(Frequency::Monthly),
            other => Err(format!(
                "invalid frequency {other:?} (expected 'daily', 'weekly', or 'monthly')"
            )),
        }
    }
}

impl Frequency {
    /// Label of the bin containing `date`.
    pub fn bin_label(self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date,
            Frequency::Weekly => {
                let ahead = 6 - date.weekday().num_days_from_monday();
                date + Days::new(u64::from(ahead))
            }
            Frequency::Monthly => last_day_of_month(date),
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 { (date.year() + 1, 1) } else { (date.year(), date.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// One aggregated row of the price view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampledRow {
    pub date: NaiveDate,
    pub price: f64,
    pub returns: Option<f64>,
    pub volatility: Option<f64>,
}

fn mean_defined(values: &[Option<f64>]) -> Option<f64> {
    let (sum, n) = values.iter().flatten().fold((0.0, 0usize), |(s, n), &x| (s + x, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Aggregate aligned columns into bins of `freq`.
///
/// Parameters
/// ----------
/// - `dates`: strictly increasing dates.
/// - `prices`, `returns`, `volatility`: columns aligned with `dates`.
/// - `freq`: target frequency; `Daily` returns the rows unchanged.
///
/// Panics
/// ------
/// - Never panics for equal-length inputs; extra trailing entries in the
///   longer columns are ignored.
pub fn resample(
    dates: &[NaiveDate], prices: &[f64], returns: &[Option<f64>], volatility: &[Option<f64>],
    freq: Frequency,
) -> Vec<ResampledRow> {
    let n = dates.len().min(prices.len()).min(returns.len()).min(volatility.len());
    let mut rows = Vec::new();
    let mut start = 0;
    while start < n {
        let label = freq.bin_label(dates[start]);
        let mut end = start + 1;
        while end < n && freq.bin_label(dates[end]) == label {
            end += 1;
        }
        let count = (end - start) as f64;
        rows.push(ResampledRow {
            date: label,
            price: prices[start..end].iter().sum::<f64>() / count,
            returns: mean_defined(&returns[start..end]),
            volatility: mean_defined(&volatility[start..end]),
        });
        start = end;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Bin labelling for weekly and monthly frequencies.
    // - Mean aggregation over defined values only.
    // - Frequency parsing.
    // -------------------------------------------------------------------------

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify weekly labels fall on the following (or same) Sunday.
    //
    // Given
    // -----
    // - Wed 2024-01-03 and Sun 2024-01-07.
    //
    // Expect
    // ------
    // - Both labelled 2024-01-07.
    fn weekly_bin_label_is_week_ending_sunday() {
        assert_eq!(Frequency::Weekly.bin_label(d(2024, 1, 3)), d(2024, 1, 7));
        assert_eq!(Frequency::Weekly.bin_label(d(2024, 1, 7)), d(2024, 1, 7));
        assert_eq!(Frequency::Weekly.bin_label(d(2024, 1, 8)), d(2024, 1, 14));
    }

    #[test]
    // Purpose
    // -------
    // Verify month-end labels, including December and leap February.
    //
    // Given
    // -----
    // - 2024-02-10 and 2023-12-05.
    //
    // Expect
    // ------
    // - 2024-02-29 and 2023-12-31.
    fn monthly_bin_label_is_month_end() {
        assert_eq!(Frequency::Monthly.bin_label(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(Frequency::Monthly.bin_label(d(2023, 12, 5)), d(2023, 12, 31));
    }

    #[test]
    // Purpose
    // -------
    // Check that monthly resampling averages prices and ignores undefined
    // returns and volatility.
    //
    // Given
    // -----
    // - Two January rows (first return undefined) and one February row.
    //
    // Expect
    // ------
    // - Two bins; January price mean 15, return mean equals the single
    //   defined return; February volatility `None`.
    fn resample_monthly_means_over_defined_values() {
        // Arrange
        let dates = vec![d(2024, 1, 30), d(2024, 1, 31), d(2024, 2, 1)];
        let prices = vec![10.0, 20.0, 30.0];
        let returns = vec![None, Some(2.0), Some(4.0)];
        let vol = vec![None, Some(1.0), None];

        // Act
        let rows = resample(&dates, &prices, &returns, &vol, Frequency::Monthly);

        // Assert
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, d(2024, 1, 31));
        assert_eq!(rows[0].price, 15.0);
        assert_eq!(rows[0].returns, Some(2.0));
        assert_eq!(rows[0].volatility, Some(1.0));
        assert_eq!(rows[1].volatility, None);
    }

    #[test]
    // Purpose
    // -------
    // Ensure frequency parsing accepts the documented names and rejects
    // anything else.
    fn frequency_from_str_parses_known_names() {
        assert_eq!("weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
        assert_eq!("Monthly".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert!("hourly".parse::<Frequency>().is_err());
    }
}
