//! Trailing-window trade aggregation.
//!
//! The reference "now" is injected by the caller so windowing is
//! deterministic and testable without touching the clock.

use rust_decimal::Decimal;
use std::time::Duration;
use whale_radar_core::{Trade, TradeSide};

/// Aggregates over the trades inside one lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowTotals {
    /// Total traded notional, quote currency.
    pub notional: Decimal,
    /// Buy notional minus sell notional; positive when the taker buy side
    /// dominates.
    pub net_buy: Decimal,
}

/// Sums notional and net-buy notional over the trades within
/// `[now_ms - lookback, now_ms]`.
///
/// A trade at exactly `now_ms - lookback` is included; one a millisecond
/// older is not. Future-dated trades (clock skew) are excluded rather than
/// treated as very recent. Input order does not matter and the function
/// never fails; empty or fully-filtered input yields zero totals.
#[must_use]
pub fn aggregate_window(trades: &[Trade], lookback: Duration, now_ms: i64) -> WindowTotals {
    let lookback_ms = lookback.as_millis() as i64;
    let mut totals = WindowTotals::default();

    for trade in trades {
        let age_ms = now_ms - trade.timestamp_ms;
        if age_ms < 0 || age_ms > lookback_ms {
            continue;
        }
        let amount = trade.notional();
        totals.notional += amount;
        match trade.side {
            TradeSide::Buy => totals.net_buy += amount,
            TradeSide::Sell => totals.net_buy -= amount,
        }
    }

    totals
}
