//! Order-book depth imbalance.

use rust_decimal::Decimal;
use whale_radar_core::OrderBookSnapshot;

/// Bid-side minus ask-side notional over the top `depth` levels.
///
/// A book with fewer than `depth` levels contributes what it has; an empty
/// book yields zero. Positive means buy-side depth dominance.
#[must_use]
pub fn book_imbalance(snapshot: &OrderBookSnapshot, depth: usize) -> Decimal {
    snapshot
        .levels
        .iter()
        .take(depth)
        .map(|level| level.bid_notional() - level.ask_notional())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use whale_radar_core::OrderBookLevel;

    fn level(bid_price: Decimal, bid_size: Decimal, ask_price: Decimal, ask_size: Decimal) -> OrderBookLevel {
        OrderBookLevel {
            bid_price,
            bid_size,
            ask_price,
            ask_size,
        }
    }

    #[test]
    fn empty_book_is_zero() {
        let snapshot = OrderBookSnapshot::empty("KRW-BTC");
        assert_eq!(book_imbalance(&snapshot, 5), Decimal::ZERO);
    }

    #[test]
    fn balanced_book_is_exactly_zero() {
        let snapshot = OrderBookSnapshot {
            market: "KRW-BTC".to_string(),
            levels: vec![
                level(dec!(100), dec!(2), dec!(200), dec!(1)),
                level(dec!(99), dec!(4), dec!(99), dec!(4)),
            ],
        };
        assert_eq!(book_imbalance(&snapshot, 5), Decimal::ZERO);
    }

    #[test]
    fn bid_dominant_book_is_positive() {
        let snapshot = OrderBookSnapshot {
            market: "KRW-BTC".to_string(),
            levels: vec![level(dec!(100), dec!(20), dec!(100), dec!(5))],
        };
        assert_eq!(book_imbalance(&snapshot, 5), dec!(1500));
    }

    #[test]
    fn only_top_n_levels_count() {
        let snapshot = OrderBookSnapshot {
            market: "KRW-BTC".to_string(),
            levels: vec![
                level(dec!(100), dec!(1), dec!(100), dec!(1)),
                level(dec!(100), dec!(1), dec!(100), dec!(1)),
                // Past the depth cut; would swing the result if counted.
                level(dec!(100), dec!(1000), dec!(100), dec!(1)),
            ],
        };
        assert_eq!(book_imbalance(&snapshot, 2), Decimal::ZERO);
    }

    #[test]
    fn partial_depth_is_not_an_error() {
        let snapshot = OrderBookSnapshot {
            market: "KRW-BTC".to_string(),
            levels: vec![level(dec!(10), dec!(3), dec!(10), dec!(1))],
        };
        assert_eq!(book_imbalance(&snapshot, 5), dec!(20));
    }
}
