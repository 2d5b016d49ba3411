//! Technical indicators computed over a candle series.

pub mod bank;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub use bank::IndicatorBank;
