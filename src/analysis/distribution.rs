//! analysis::distribution — shape of the price and return distributions.
//!
//! For each of price and returns (undefined values dropped): location,
//! dispersion, bias-corrected skewness and excess kurtosis, a Jarque–Bera
//! normality test and the percentile ladder. A failed Jarque–Bera test
//! leaves the normality fields `None`; the rest of the block is kept.
use crate::analysis::{
    descriptive::{PercentileLadder, excess_kurtosis, mean, median, sample_std, skewness},
    stationarity::absorb,
};
use crate::series::{DerivedSeries, PriceSeries};
use crate::statistical_tests::JarqueBeraOutcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub median: f64,
    pub std: Option<f64>,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub jarque_bera_stat: Option<f64>,
    /// Jarque–Bera p-value.
    pub jarque_bera: Option<f64>,
    pub is_normal: Option<bool>,
    pub percentiles: PercentileLadder,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionReport {
    pub price: Option<DistributionStats>,
    pub returns: Option<DistributionStats>,
}

/// Distribution statistics of `data`; `None` for an empty slice.
pub fn describe_distribution(data: &[f64], name: &str, significance: f64) -> Option<DistributionStats> {
    let jb = absorb(JarqueBeraOutcome::jarque_bera(data), "jarque_bera", name);
    Some(DistributionStats {
        mean: mean(data)?,
        median: median(data)?,
        std: sample_std(data),
        skewness: skewness(data),
        kurtosis: excess_kurtosis(data),
        jarque_bera_stat: jb.map(|o| o.statistic),
        jarque_bera: jb.map(|o| o.p_value),
        is_normal: jb.map(|o| o.p_value > significance),
        percentiles: PercentileLadder::from_data(data)?,
    })
}

pub fn analyze_distribution(
    series: &PriceSeries, derived: &DerivedSeries, significance: f64,
) -> DistributionReport {
    tracing::info!("analyzing price and return distributions");
    DistributionReport {
        price: describe_distribution(&series.prices().to_vec(), "price", significance),
        returns: describe_distribution(&derived.defined_returns(), "returns", significance),
    }
}
