//! report::text — plain-text rendering of a [`FullAnalysis`].
//!
//! Layout: a 60-column `=` banner with the title, the data period and
//! observation count, then one `-`-ruled section per analysis. A section
//! whose inputs are absent is left out entirely; a line whose value is
//! absent is left out of its section.
use crate::report::summary::FullAnalysis;
use crate::series::PriceSeries;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(title.to_string());
    lines.push("-".repeat(RULE_WIDTH));
}

/// Render the analysis summary for `series` as fixed-width text.
pub fn render_summary_text(series: &PriceSeries, analysis: &FullAnalysis) -> String {
    let mut lines = vec![
        "=".repeat(BANNER_WIDTH),
        "COMMODITY PRICE ANALYSIS SUMMARY".to_string(),
        "=".repeat(BANNER_WIDTH),
        String::new(),
        format!("Data Period: {} to {}", series.first_date(), series.last_date()),
        format!("Total Observations: {}", group_thousands(series.len())),
    ];

    if let Some(adf) = &analysis.price_stationarity.adf {
        section(&mut lines, "STATIONARITY ANALYSIS");
        let verdict = if adf.is_stationary { "STATIONARY" } else { "NON-STATIONARY" };
        lines.push(format!("Price Levels: {verdict}"));
        lines.push(format!("ADF p-value: {:.6}", adf.p_value));
        if let Some(kpss) = &analysis.price_stationarity.kpss {
            lines.push(format!("KPSS p-value: {:.6}", kpss.p_value));
        }
    }

    if let Some(trend) = &analysis.trend.linear_trend {
        section(&mut lines, "TREND ANALYSIS");
        lines.push(format!("Linear Trend Slope: {:.6} (per day)", trend.slope));
        lines.push(format!("R-squared: {:.4}", trend.r_squared));
    }

    if let Some(vol) = &analysis.volatility.summary {
        section(&mut lines, "VOLATILITY ANALYSIS");
        lines.push(format!("Mean Annualized Volatility: {:.2}%", vol.mean_volatility));
        lines.push(format!("Max Annualized Volatility: {:.2}%", vol.max_volatility));
        if let Some(clustering) = &analysis.volatility.clustering {
            let present = if clustering.has_clustering { "PRESENT" } else { "ABSENT" };
            lines.push(format!("Volatility Clustering: {present}"));
        }
        lines.push(format!("Current Regime: {}", analysis.volatility.regime.regime));
    }

    if let Some(price) = &analysis.distribution.price {
        section(&mut lines, "DISTRIBUTION ANALYSIS");
        if let Some(skew) = price.skewness {
            lines.push(format!("Price Skewness: {skew:.4}"));
        }
        if let Some(kurt) = price.kurtosis {
            lines.push(format!("Price Kurtosis: {kurt:.4}"));
        }
        if let (Some(p), Some(normal)) = (price.jarque_bera, price.is_normal) {
            lines.push(format!("Normality (J-B p-value): {p:.6}"));
            lines.push(format!("Normal Distribution: {}", if normal { "YES" } else { "NO" }));
        }
    }

    lines.push(String::new());
    lines.push("=".repeat(BANNER_WIDTH));
    lines.join("\n")
}
