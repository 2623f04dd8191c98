//! Alert composition.
//!
//! Turns per-market signal lists into one human-readable alert. Markets
//! appear in the order the caller supplies (configuration order), each on
//! its own line; a run with no signals produces no alert at all, which
//! suppresses any downstream delivery.

use rust_decimal::Decimal;
use whale_radar_core::{Alert, Signal};

/// One evaluated market and whatever signals it produced.
#[derive(Debug, Clone)]
pub struct MarketSignals {
    pub market: String,
    pub signals: Vec<Signal>,
}

/// Formats a quote-currency amount with thousands separators and no
/// decimals. Signed amounts carry an explicit `+` when non-negative.
#[must_use]
pub fn format_amount(value: Decimal, signed: bool) -> String {
    let rounded = value.round();
    let raw = rounded.abs().to_string();
    let grouped: String = raw
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if rounded < Decimal::ZERO {
        format!("-{grouped}")
    } else if signed {
        format!("+{grouped}")
    } else {
        grouped
    }
}

fn format_line(entry: &MarketSignals) -> String {
    let parts: Vec<String> = entry
        .signals
        .iter()
        .map(|signal| {
            format!(
                "{} {}",
                signal.kind,
                format_amount(signal.magnitude, signal.kind.is_signed())
            )
        })
        .collect();
    format!("[{}] {}", entry.market, parts.join(" / "))
}

/// Composes the per-run alert, or `None` when no market produced a signal.
#[must_use]
pub fn compose(title: &str, evaluated: &[MarketSignals]) -> Option<Alert> {
    let lines: Vec<String> = evaluated
        .iter()
        .filter(|entry| !entry.signals.is_empty())
        .map(format_line)
        .collect();

    if lines.is_empty() {
        return None;
    }
    Some(Alert {
        title: title.to_string(),
        body: lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use whale_radar_core::SignalKind;

    fn entry(market: &str, signals: Vec<Signal>) -> MarketSignals {
        MarketSignals {
            market: market.to_string(),
            signals,
        }
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(0), false), "0");
        assert_eq!(format_amount(dec!(999), false), "999");
        assert_eq!(format_amount(dec!(1500), false), "1,500");
        assert_eq!(format_amount(dec!(500000000), false), "500,000,000");
    }

    #[test]
    fn format_amount_rounds_and_signs() {
        assert_eq!(format_amount(dec!(1234.6), false), "1,235");
        assert_eq!(format_amount(dec!(900), true), "+900");
        assert_eq!(format_amount(dec!(-1500), true), "-1,500");
    }

    #[test]
    fn no_signals_means_no_alert() {
        assert!(compose("radar", &[]).is_none());
        assert!(compose("radar", &[entry("KRW-BTC", Vec::new())]).is_none());
    }

    #[test]
    fn one_line_per_signalling_market() {
        let evaluated = vec![
            entry(
                "KRW-BTC",
                vec![
                    Signal::new(SignalKind::LargeNotional, "KRW-BTC", dec!(1100)),
                    Signal::new(SignalKind::NetBuyPressure, "KRW-BTC", dec!(900)),
                    Signal::new(SignalKind::OrderBookImbalance, "KRW-BTC", dec!(1500)),
                ],
            ),
            entry("KRW-ETH", Vec::new()),
            entry(
                "KRW-XRP",
                vec![Signal::new(SignalKind::LargeNotional, "KRW-XRP", dec!(2000))],
            ),
        ];
        let alert = compose("Upbit whale radar", &evaluated).unwrap();
        assert_eq!(alert.title, "Upbit whale radar");
        assert_eq!(
            alert.body,
            "[KRW-BTC] large notional 1,100 / net buy +900 / book imbalance +1,500\n\
             [KRW-XRP] large notional 2,000"
        );
    }

    #[test]
    fn market_order_follows_caller() {
        let evaluated = vec![
            entry(
                "KRW-ETH",
                vec![Signal::new(SignalKind::LargeNotional, "KRW-ETH", dec!(1))],
            ),
            entry(
                "KRW-BTC",
                vec![Signal::new(SignalKind::LargeNotional, "KRW-BTC", dec!(2))],
            ),
        ];
        let alert = compose("radar", &evaluated).unwrap();
        let first = alert.body.lines().next().unwrap();
        assert!(first.starts_with("[KRW-ETH]"));
    }
}
