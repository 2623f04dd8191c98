//! Radar configuration.
//!
//! Thresholds and the lookback window are process-wide; there are no
//! per-market overrides. The config is an explicit struct handed to the
//! detector at construction time, never read ad hoc inside algorithms.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Markets scanned each run, in alert order.
    pub markets: Vec<String>,
    /// Trailing trade window in seconds.
    pub lookback_secs: u64,
    /// Number of recent trades requested per market.
    pub trade_count: u32,
    /// Order-book levels participating in the imbalance sum.
    pub orderbook_depth: usize,
    /// Upper bound on concurrent market fetches.
    pub max_concurrent_fetches: usize,
    /// Overall deadline for one scan pass, seconds.
    pub run_deadline_secs: u64,
    /// Sleep between passes in watch mode, seconds.
    pub interval_secs: u64,
    pub thresholds: ThresholdConfig,
    pub upbit: UpbitConfig,
    pub ntfy: NtfyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum windowed traded notional, quote currency.
    pub notional: Decimal,
    /// Minimum windowed net-buy notional, quote currency.
    pub net_buy: Decimal,
    /// Minimum bid-over-ask depth notional, quote currency.
    pub ob_imbalance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpbitConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NtfyConfig {
    pub url: String,
    /// Absent topic means alerts are computed and logged, not delivered.
    pub topic: Option<String>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            markets: vec!["KRW-BTC".to_string(), "KRW-ETH".to_string()],
            lookback_secs: 90,
            trade_count: 200,
            orderbook_depth: 5,
            max_concurrent_fetches: 4,
            run_deadline_secs: 30,
            interval_secs: 60,
            thresholds: ThresholdConfig::default(),
            upbit: UpbitConfig::default(),
            ntfy: NtfyConfig::default(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            notional: Decimal::new(500_000_000, 0),
            net_buy: Decimal::new(200_000_000, 0),
            ob_imbalance: Decimal::new(500_000_000, 0),
        }
    }
}

impl Default for UpbitConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.upbit.com".to_string(),
        }
    }
}

impl Default for NtfyConfig {
    fn default() -> Self {
        Self {
            url: "https://ntfy.sh".to_string(),
            topic: None,
        }
    }
}

impl RadarConfig {
    /// Trailing trade window as a `Duration`.
    #[must_use]
    pub const fn lookback(&self) -> Duration {
        Duration::from_secs(self.lookback_secs)
    }

    /// Overall per-run deadline as a `Duration`.
    #[must_use]
    pub const fn run_deadline(&self) -> Duration {
        Duration::from_secs(self.run_deadline_secs)
    }

    /// Watch-mode pause between passes as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Validates the configuration. Fatal at startup; the run does not
    /// begin on failure.
    ///
    /// # Errors
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.markets.is_empty() {
            anyhow::bail!("market list is empty");
        }
        if self.markets.iter().any(|m| m.trim().is_empty()) {
            anyhow::bail!("market list contains a blank entry");
        }
        if self.lookback_secs == 0 {
            anyhow::bail!("lookback_secs must be positive");
        }
        if self.trade_count == 0 {
            anyhow::bail!("trade_count must be positive");
        }
        if self.orderbook_depth == 0 {
            anyhow::bail!("orderbook_depth must be positive");
        }
        if self.max_concurrent_fetches == 0 {
            anyhow::bail!("max_concurrent_fetches must be positive");
        }
        if self.run_deadline_secs == 0 {
            anyhow::bail!("run_deadline_secs must be positive");
        }
        for (name, value) in [
            ("thresholds.notional", self.thresholds.notional),
            ("thresholds.net_buy", self.thresholds.net_buy),
            ("thresholds.ob_imbalance", self.thresholds.ob_imbalance),
        ] {
            if value <= Decimal::ZERO {
                anyhow::bail!("{name} must be positive, got {value}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_valid() {
        let config = RadarConfig::default();
        config.validate().unwrap();
        assert_eq!(config.markets, vec!["KRW-BTC", "KRW-ETH"]);
        assert_eq!(config.lookback_secs, 90);
        assert_eq!(config.thresholds.notional, dec!(500000000));
        assert_eq!(config.thresholds.net_buy, dec!(200000000));
        assert_eq!(config.thresholds.ob_imbalance, dec!(500000000));
        assert!(config.ntfy.topic.is_none());
    }

    #[test]
    fn empty_market_list_is_fatal() {
        let config = RadarConfig {
            markets: Vec::new(),
            ..RadarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_threshold_is_fatal() {
        let config = RadarConfig {
            thresholds: ThresholdConfig {
                net_buy: Decimal::ZERO,
                ..ThresholdConfig::default()
            },
            ..RadarConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("net_buy"));
    }

    #[test]
    fn zero_lookback_is_fatal() {
        let config = RadarConfig {
            lookback_secs: 0,
            ..RadarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RadarConfig = serde_json::from_str(r#"{"lookback_secs": 30}"#).unwrap();
        assert_eq!(config.lookback_secs, 30);
        assert_eq!(config.orderbook_depth, 5);
    }
}
