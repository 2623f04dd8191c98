//! Collaborator traits at the edges of the detector.
//!
//! The detector only consumes these; the exchange and notification crates
//! implement them. Per-market failures stay behind these seams — a fetch
//! error for one market never aborts the run.

use crate::market::{OrderBookSnapshot, Trade};
use crate::signal::Alert;
use anyhow::Result;
use async_trait::async_trait;

/// Source of public market data for one exchange.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the most recent `count` trades for a market, newest first
    /// or not — the detector does not rely on ordering.
    async fn recent_trades(&self, market: &str, count: u32) -> Result<Vec<Trade>>;

    /// Fetches the current order book for a market, levels best to worst.
    async fn order_book(&self, market: &str) -> Result<OrderBookSnapshot>;
}

/// Destination for the composed alert, invoked at most once per run.
#[async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<()>;
}
