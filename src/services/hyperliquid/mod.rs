//! Hyperliquid public market data.

pub mod interval;
pub mod messages;
pub mod rest;

pub use interval::interval_millis;
pub use rest::HyperliquidRestClient;
