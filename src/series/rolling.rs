//! series::rolling — single-pass trailing-window moments.
//!
//! Purpose
//! -------
//! Compute trailing rolling means and sample standard deviations over
//! partially-defined series in one forward pass, maintaining running sums
//! instead of re-scanning each window (O(n) per window size rather than
//! O(n·w)).
//!
//! Key behaviors
//! -------------
//! - A window ending at index `i` is evaluated only when it spans exactly
//!   `window` observations *and* all of them are defined. Otherwise the
//!   output is `None`; no shorter effective window is ever substituted.
//! - Running sums are accumulated around a shift (the first defined value
//!   seen) to limit cancellation in `Σx² − (Σx)²/w`.
//! - Variances are clamped at zero before the square root, so every
//!   defined standard deviation is ≥ 0 even under rounding.
//!
//! Conventions
//! -----------
//! - Standard deviations use the sample (`n − 1`) denominator; a window of
//!   one observation therefore never yields a standard deviation.
//! - Callers validate `window ≥ 1` via `series::validation::validate_windows`;
//!   a zero window here yields an all-`None` column.

/// Running sums over the current window.
#[derive(Debug, Default)]
struct WindowSums {
    shift: Option<f64>,
    sum: f64,
    sum_sq: f64,
    defined: usize,
}

impl WindowSums {
    fn add(&mut self, x: f64) {
        let k = *self.shift.get_or_insert(x);
        let d = x - k;
        self.sum += d;
        self.sum_sq += d * d;
        self.defined += 1;
    }

    fn remove(&mut self, x: f64) {
        let k = self.shift.unwrap_or(x);
        let d = x - k;
        self.sum -= d;
        self.sum_sq -= d * d;
        self.defined -= 1;
    }

    fn mean(&self, w: usize) -> f64 {
        self.shift.unwrap_or(0.0) + self.sum / w as f64
    }

    fn sample_variance(&self, w: usize) -> f64 {
        let n = w as f64;
        ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0)
    }
}

fn scan<F>(values: &[Option<f64>], window: usize, finish: F) -> Vec<Option<f64>>
where
    F: Fn(&WindowSums, usize) -> f64,
{
    let mut out = vec![None; values.len()];
    if window == 0 {
        return out;
    }
    let mut sums = WindowSums::default();
    for i in 0..values.len() {
        if let Some(x) = values[i] {
            sums.add(x);
        }
        if i >= window {
            if let Some(x) = values[i - window] {
                sums.remove(x);
            }
        }
        if i + 1 >= window && sums.defined == window {
            out[i] = Some(finish(&sums, window));
        }
    }
    out
}

/// Trailing rolling mean; `None` until `window` defined observations exist.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    scan(values, window, |s, w| s.mean(w))
}

/// Trailing rolling sample standard deviation.
///
/// Returns an all-`None` column when `window < 2`.
pub fn rolling_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window < 2 {
        return vec![None; values.len()];
    }
    scan(values, window, |s, w| s.sample_variance(w).sqrt())
}

/// Rolling standard deviation of returns scaled by `√periods_per_year`.
pub fn rolling_volatility(
    returns: &[Option<f64>], window: usize, periods_per_year: f64,
) -> Vec<Option<f64>> {
    let scale = periods_per_year.sqrt();
    rolling_std(returns, window).into_iter().map(|v| v.map(|s| s * scale)).collect()
}
