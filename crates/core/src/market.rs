//! Market-data types consumed by the signal engine.
//!
//! Trades and order-book snapshots are produced by the exchange crate and
//! never mutated by the detector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Taker side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    /// Taker bought (lifted the ask).
    Buy,
    /// Taker sold (hit the bid).
    Sell,
}

impl TradeSide {
    /// Sign applied to notional when accumulating net-buy pressure.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

/// A single executed trade from the public feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Execution time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// Execution price in the quote currency.
    pub price: Decimal,
    /// Executed base-currency volume.
    pub volume: Decimal,
    /// Taker side.
    pub side: TradeSide,
}

impl Trade {
    /// Quote-currency value of this trade.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.volume
    }
}

/// One price level of an order book, bid and ask paired as the exchange
/// reports them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub bid_price: Decimal,
    pub bid_size: Decimal,
    pub ask_price: Decimal,
    pub ask_size: Decimal,
}

impl OrderBookLevel {
    /// Quote-currency value resting on the bid side of this level.
    #[must_use]
    pub fn bid_notional(&self) -> Decimal {
        self.bid_price * self.bid_size
    }

    /// Quote-currency value resting on the ask side of this level.
    #[must_use]
    pub fn ask_notional(&self) -> Decimal {
        self.ask_price * self.ask_size
    }
}

/// Point-in-time order book for one market, levels ordered best to worst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Market identifier (e.g., "KRW-BTC").
    pub market: String,
    /// Price levels, best first.
    pub levels: Vec<OrderBookLevel>,
}

impl OrderBookSnapshot {
    /// Creates an empty snapshot for a market.
    #[must_use]
    pub fn empty(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            levels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trade_notional_is_price_times_volume() {
        let trade = Trade {
            timestamp_ms: 1_700_000_000_000,
            price: dec!(50000000),
            volume: dec!(0.5),
            side: TradeSide::Buy,
        };
        assert_eq!(trade.notional(), dec!(25000000));
    }

    #[test]
    fn side_signs() {
        assert_eq!(TradeSide::Buy.sign(), 1);
        assert_eq!(TradeSide::Sell.sign(), -1);
    }

    #[test]
    fn level_notionals() {
        let level = OrderBookLevel {
            bid_price: dec!(100),
            bid_size: dec!(3),
            ask_price: dec!(101),
            ask_size: dec!(2),
        };
        assert_eq!(level.bid_notional(), dec!(300));
        assert_eq!(level.ask_notional(), dec!(202));
    }
}
