//! Serde models for Upbit REST payloads.
//!
//! Fields the detector needs are optional here: a record the exchange
//! delivered without a usable timestamp, price, volume or side is dropped
//! during conversion instead of failing the whole batch.

use rust_decimal::Decimal;
use serde::Deserialize;
use whale_radar_core::{OrderBookLevel, OrderBookSnapshot, Trade, TradeSide};

/// One executed trade from `GET /v1/trades/ticks`.
#[derive(Debug, Deserialize)]
pub struct TradeTick {
    /// Execution time, epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Execution price.
    #[serde(default)]
    pub trade_price: Option<Decimal>,
    /// Executed volume in the base currency.
    #[serde(default)]
    pub trade_volume: Option<Decimal>,
    /// Taker side: "BID" means the taker bought, "ASK" that it sold.
    #[serde(default)]
    pub ask_bid: Option<String>,
}

impl TradeTick {
    /// Converts to a core trade, or `None` when a required field is
    /// missing or unrecognized.
    #[must_use]
    pub fn into_trade(self) -> Option<Trade> {
        let side = match self.ask_bid.as_deref() {
            Some("BID") => TradeSide::Buy,
            Some("ASK") => TradeSide::Sell,
            _ => return None,
        };
        Some(Trade {
            timestamp_ms: self.timestamp?,
            price: self.trade_price?,
            volume: self.trade_volume?,
            side,
        })
    }
}

/// One paired price level from `GET /v1/orderbook`.
#[derive(Debug, Deserialize)]
pub struct OrderbookUnit {
    #[serde(default)]
    pub bid_price: Option<Decimal>,
    #[serde(default)]
    pub bid_size: Option<Decimal>,
    #[serde(default)]
    pub ask_price: Option<Decimal>,
    #[serde(default)]
    pub ask_size: Option<Decimal>,
}

impl OrderbookUnit {
    fn into_level(self) -> Option<OrderBookLevel> {
        Some(OrderBookLevel {
            bid_price: self.bid_price?,
            bid_size: self.bid_size?,
            ask_price: self.ask_price?,
            ask_size: self.ask_size?,
        })
    }
}

/// Order book payload for one market.
#[derive(Debug, Deserialize)]
pub struct OrderbookPayload {
    pub market: String,
    /// Levels best to worst, as Upbit reports them.
    #[serde(default)]
    pub orderbook_units: Vec<OrderbookUnit>,
}

impl OrderbookPayload {
    /// Converts to a core snapshot, dropping malformed levels.
    #[must_use]
    pub fn into_snapshot(self) -> OrderBookSnapshot {
        OrderBookSnapshot {
            market: self.market,
            levels: self
                .orderbook_units
                .into_iter()
                .filter_map(OrderbookUnit::into_level)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trade_tick_parses_and_converts() {
        let raw = r#"{
            "market": "KRW-BTC",
            "timestamp": 1700000000000,
            "trade_price": 50000000.0,
            "trade_volume": 0.25,
            "ask_bid": "BID",
            "sequential_id": 17000000000001
        }"#;
        let tick: TradeTick = serde_json::from_str(raw).unwrap();
        let trade = tick.into_trade().unwrap();
        assert_eq!(trade.timestamp_ms, 1_700_000_000_000);
        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.notional(), dec!(12500000));
    }

    #[test]
    fn trade_tick_without_timestamp_is_dropped() {
        let raw = r#"{"trade_price": 100.0, "trade_volume": 1.0, "ask_bid": "ASK"}"#;
        let tick: TradeTick = serde_json::from_str(raw).unwrap();
        assert!(tick.into_trade().is_none());
    }

    #[test]
    fn trade_tick_with_unknown_side_is_dropped() {
        let tick = TradeTick {
            timestamp: Some(1),
            trade_price: Some(dec!(1)),
            trade_volume: Some(dec!(1)),
            ask_bid: Some("HOLD".to_string()),
        };
        assert!(tick.into_trade().is_none());
    }

    #[test]
    fn orderbook_payload_converts_and_drops_bad_levels() {
        let raw = r#"{
            "market": "KRW-BTC",
            "orderbook_units": [
                {"bid_price": 100.0, "bid_size": 2.0, "ask_price": 101.0, "ask_size": 1.0},
                {"bid_price": 99.0, "bid_size": 3.0, "ask_price": 102.0}
            ]
        }"#;
        let payload: OrderbookPayload = serde_json::from_str(raw).unwrap();
        let snapshot = payload.into_snapshot();
        assert_eq!(snapshot.market, "KRW-BTC");
        assert_eq!(snapshot.levels.len(), 1);
        assert_eq!(snapshot.levels[0].bid_notional(), dec!(200));
    }
}
