//! Threshold evaluation.

use crate::window::WindowTotals;
use rust_decimal::Decimal;
use whale_radar_core::{Signal, SignalKind, ThresholdConfig};

/// Process-wide signal thresholds, quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub notional: Decimal,
    pub net_buy: Decimal,
    pub ob_imbalance: Decimal,
}

impl From<&ThresholdConfig> for Thresholds {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            notional: config.notional,
            net_buy: config.net_buy,
            ob_imbalance: config.ob_imbalance,
        }
    }
}

/// Evaluates one market's aggregates against the thresholds.
///
/// The three conditions are independent (a market can trigger all of them)
/// and tested in fixed order: large notional, net buy, book imbalance.
/// Net-buy and imbalance tests are deliberately one-sided — this is a
/// whale *buying* radar, and a strongly sell-dominant market produces no
/// signal.
#[must_use]
pub fn evaluate(
    market: &str,
    totals: WindowTotals,
    imbalance: Decimal,
    thresholds: &Thresholds,
) -> Vec<Signal> {
    let mut signals = Vec::new();
    if totals.notional >= thresholds.notional {
        signals.push(Signal::new(
            SignalKind::LargeNotional,
            market,
            totals.notional,
        ));
    }
    if totals.net_buy >= thresholds.net_buy {
        signals.push(Signal::new(SignalKind::NetBuyPressure, market, totals.net_buy));
    }
    if imbalance >= thresholds.ob_imbalance {
        signals.push(Signal::new(SignalKind::OrderBookImbalance, market, imbalance));
    }
    signals
}
