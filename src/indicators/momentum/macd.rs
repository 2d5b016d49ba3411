//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::ema_close_series;
use crate::models::indicators::{Candle, MacdIndicator};

pub const MACD_FAST: u32 = 12;
pub const MACD_SLOW: u32 = 26;
pub const MACD_SIGNAL: u32 = 9;

/// MACD line, signal line and histogram at every index.
#[derive(Debug, Clone, Default)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn macd_series(candles: &[Candle], fast_period: u32, slow_period: u32, signal_period: u32) -> MacdSeries {
    let fast = ema_close_series(candles, fast_period);
    let slow = ema_close_series(candles, slow_period);

    let macd: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
    let signal = math::ema_series(&macd, signal_period as usize);
    let histogram = macd.iter().zip(signal.iter()).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD indicator at the latest candle
pub fn calculate_macd(candles: &[Candle], fast_period: u32, slow_period: u32, signal_period: u32) -> Option<MacdIndicator> {
    let series = macd_series(candles, fast_period, slow_period, signal_period);

    Some(MacdIndicator {
        macd: math::latest(&series.macd)?,
        signal: math::latest(&series.signal)?,
        histogram: math::latest(&series.histogram)?,
        period: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
