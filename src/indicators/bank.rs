//! Full indicator set reduced to the latest candle.

use crate::indicators::momentum::{macd_series, rsi_series, MACD_FAST, MACD_SIGNAL, MACD_SLOW, RSI_PERIOD};
use crate::indicators::trend::{sma_close_series, MA_LONG, MA_MEDIUM, MA_SHORT};
use crate::indicators::volatility::{atr_series, bollinger_series, ATR_PERIOD, BOLLINGER_PERIOD, BOLLINGER_STD_DEV};
use crate::models::indicators::{Candle, IndicatorSnapshot};

pub struct IndicatorBank;

impl IndicatorBank {
    /// Compute RSI(14), Bollinger(20, 2), MACD(12, 26, 9), SMA 7/25/99 and
    /// ATR(14) over the whole series and keep the last value of each.
    ///
    /// Values whose window does not fit in the series are NaN.
    pub fn compute(candles: &[Candle]) -> IndicatorSnapshot {
        let Some(last) = candles.last() else {
            return IndicatorSnapshot::undefined();
        };

        let bollinger = bollinger_series(candles, BOLLINGER_PERIOD, BOLLINGER_STD_DEV);
        let macd = macd_series(candles, MACD_FAST, MACD_SLOW, MACD_SIGNAL);

        IndicatorSnapshot {
            price: last.close,
            rsi: last_or_nan(&rsi_series(candles, RSI_PERIOD)),
            bollinger_upper: last_or_nan(&bollinger.upper),
            bollinger_middle: last_or_nan(&bollinger.middle),
            bollinger_lower: last_or_nan(&bollinger.lower),
            macd: last_or_nan(&macd.macd),
            macd_signal: last_or_nan(&macd.signal),
            macd_histogram: last_or_nan(&macd.histogram),
            ma7: last_or_nan(&sma_close_series(candles, MA_SHORT)),
            ma25: last_or_nan(&sma_close_series(candles, MA_MEDIUM)),
            ma99: last_or_nan(&sma_close_series(candles, MA_LONG)),
            atr: last_or_nan(&atr_series(candles, ATR_PERIOD)),
        }
    }
}

fn last_or_nan(series: &[f64]) -> f64 {
    series.last().copied().unwrap_or(f64::NAN)
}
