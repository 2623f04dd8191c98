//! Signal and alert types produced by the detector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named condition a market can trigger in one evaluation run.
///
/// Variants are listed in evaluation order; alert lines render a market's
/// signals in this order so output is deterministic for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Aggregate traded notional in the lookback window crossed the
    /// threshold.
    LargeNotional,
    /// Signed buy-minus-sell notional in the lookback window crossed the
    /// threshold.
    NetBuyPressure,
    /// Bid-side depth exceeds ask-side depth by more than the threshold.
    OrderBookImbalance,
}

impl SignalKind {
    /// All kinds in evaluation order.
    pub const ALL: [Self; 3] = [
        Self::LargeNotional,
        Self::NetBuyPressure,
        Self::OrderBookImbalance,
    ];

    /// Label used in alert lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LargeNotional => "large notional",
            Self::NetBuyPressure => "net buy",
            Self::OrderBookImbalance => "book imbalance",
        }
    }

    /// True for kinds whose magnitude is a signed quantity and is rendered
    /// with an explicit `+` in alert lines.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::NetBuyPressure | Self::OrderBookImbalance)
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A thresholded condition detected for one market in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Which condition fired.
    pub kind: SignalKind,
    /// Market that triggered it.
    pub market: String,
    /// The value that crossed the threshold, in the quote currency.
    pub magnitude: Decimal,
}

impl Signal {
    /// Creates a signal for a market.
    #[must_use]
    pub fn new(kind: SignalKind, market: impl Into<String>, magnitude: Decimal) -> Self {
        Self {
            kind,
            market: market.into(),
            magnitude,
        }
    }
}

/// Human-readable alert composed once per run, handed to the sender and
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_order_is_fixed() {
        assert_eq!(
            SignalKind::ALL,
            [
                SignalKind::LargeNotional,
                SignalKind::NetBuyPressure,
                SignalKind::OrderBookImbalance,
            ]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(SignalKind::LargeNotional.to_string(), "large notional");
        assert!(!SignalKind::LargeNotional.is_signed());
        assert!(SignalKind::NetBuyPressure.is_signed());
        assert!(SignalKind::OrderBookImbalance.is_signed());
    }
}
