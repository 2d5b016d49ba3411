//! Coinpulse: periodic technical scoring of a crypto asset universe.
//!
//! The indicator bank and scoring engine are pure and synchronous; the
//! services and core runtime fetch candles, assemble a snapshot and persist it.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
