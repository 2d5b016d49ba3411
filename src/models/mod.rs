//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;
pub mod snapshot;

pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, Candle, IndicatorSnapshot, MacdIndicator, RsiIndicator,
    SmaIndicator,
};
pub use signal::{Assessment, FearGreed, MarketBias, RunContext, SignalLabel};
pub use snapshot::{MarketSummary, SnapshotDocument, SymbolReport};
