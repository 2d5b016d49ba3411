//! Signal evaluation: scoring, labels and market bias.

pub mod bias;
pub mod engine;
pub mod labels;
pub mod scoring;

pub use bias::detect_bias;
pub use engine::{SignalEngine, MIN_CANDLES};
pub use labels::label_for_score;
pub use scoring::{exit_levels, score_snapshot};
