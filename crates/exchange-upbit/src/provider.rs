//! `MarketDataProvider` implementation on top of the REST client.

use crate::client::UpbitClient;
use crate::models::TradeTick;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;
use whale_radar_core::{MarketDataProvider, OrderBookSnapshot, Trade};

#[async_trait]
impl MarketDataProvider for UpbitClient {
    async fn recent_trades(&self, market: &str, count: u32) -> Result<Vec<Trade>> {
        let ticks = self.trade_ticks(market, count).await?;
        let total = ticks.len();
        let trades: Vec<Trade> = ticks.into_iter().filter_map(TradeTick::into_trade).collect();
        if trades.len() < total {
            debug!(
                %market,
                dropped = total - trades.len(),
                "dropped malformed trade records"
            );
        }
        Ok(trades)
    }

    async fn order_book(&self, market: &str) -> Result<OrderBookSnapshot> {
        let mut payloads = self.orderbooks(&[market]).await?;
        // A missing book is not an error; it just contributes zero imbalance.
        Ok(match payloads.pop() {
            Some(payload) => payload.into_snapshot(),
            None => OrderBookSnapshot::empty(market),
        })
    }
}
