//! Core types and traits for the whale radar.
//!
//! This crate defines the market-data and signal types shared across the
//! workspace, the `RadarConfig` configuration struct with its loader, and
//! the collaborator traits implemented by the exchange and notification
//! crates.

pub mod config;
pub mod config_loader;
pub mod market;
pub mod signal;
pub mod traits;

pub use config::{NtfyConfig, RadarConfig, ThresholdConfig, UpbitConfig};
pub use config_loader::ConfigLoader;
pub use market::{OrderBookLevel, OrderBookSnapshot, Trade, TradeSide};
pub use signal::{Alert, Signal, SignalKind};
pub use traits::{AlertSender, MarketDataProvider};
