//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::{closes, Candle, RsiIndicator};

pub const RSI_PERIOD: u32 = 14;

/// RSI at every index.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = mean gain / mean loss over `period` close-to-close changes
///
/// The first candle has no predecessor and counts as an unchanged close. When
/// the mean loss is zero the value saturates to exactly 100.
pub fn rsi_series(candles: &[Candle], period: u32) -> Vec<f64> {
    let closes = closes(candles);
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        let change = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let avg_gain = math::sma_series(&gains, period as usize);
    let avg_loss = math::sma_series(&losses, period as usize);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(&gain, &loss)| {
            if gain.is_nan() || loss.is_nan() {
                f64::NAN
            } else if loss == 0.0 {
                100.0
            } else {
                let rs = gain / loss;
                100.0 - (100.0 / (1.0 + rs))
            }
        })
        .collect()
}

/// Calculate RSI indicator at the latest candle
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let value = math::latest(&rsi_series(candles, period))?;
    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Option<RsiIndicator> {
    calculate_rsi(candles, RSI_PERIOD)
}
