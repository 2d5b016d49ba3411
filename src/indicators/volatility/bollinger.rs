//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{closes, BollingerBandsIndicator, Candle};

pub const BOLLINGER_PERIOD: u32 = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn bollinger_series(candles: &[Candle], period: u32, std_dev: f64) -> BollingerSeries {
    let closes = closes(candles);
    let middle = math::sma_series(&closes, period as usize);
    let std = math::rolling_std_series(&closes, period as usize);

    let upper = middle.iter().zip(std.iter()).map(|(m, s)| m + std_dev * s).collect();
    let lower = middle.iter().zip(std.iter()).map(|(m, s)| m - std_dev * s).collect();

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

/// Calculate Bollinger Bands at the latest candle
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    let series = bollinger_series(candles, period, std_dev);

    Some(BollingerBandsIndicator {
        upper: math::latest(&series.upper)?,
        middle: math::latest(&series.middle)?,
        lower: math::latest(&series.lower)?,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(candles: &[Candle]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(candles, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
