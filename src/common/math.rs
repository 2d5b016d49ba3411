//! Rolling-window and exponential smoothing primitives.
//!
//! Every `*_series` function returns exactly one value per input value. Points
//! where the window is not yet full are `f64::NAN`.

/// Simple moving average over `period` values at every index.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        out[i] = window.iter().sum::<f64>() / period as f64;
    }
    out
}

/// Sample standard deviation (divisor `n - 1`) over `period` values.
pub fn rolling_std_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period < 2 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period - 1) as f64;
        out[i] = variance.sqrt();
    }
    out
}

/// Exponential moving average with `alpha = 2 / (span + 1)`, seeded with the
/// first value. Every index is defined.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let alpha = smoothing_factor(span);
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            None => value,
            Some(p) => ema_from_previous(value, p, alpha),
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

pub fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * previous
}

/// True range of a single bar. Without a previous close only the bar's own
/// range is available.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(pc) => range.max((high - pc).abs()).max((low - pc).abs()),
        None => range,
    }
}

/// Last element of a series, `None` when the series is empty or the last
/// point is undefined.
pub fn latest(series: &[f64]) -> Option<f64> {
    series.last().copied().filter(|v| !v.is_nan())
}
