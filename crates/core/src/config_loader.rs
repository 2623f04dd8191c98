//! Configuration loading.
//!
//! Merges `config/Config.toml` with `WHALE_`-prefixed environment
//! variables via figment, then applies the flat environment keys the
//! deployment scripts use (`MARKETS`, `LOOKBACK_SEC`, `THRESH_*`,
//! `NTFY_*`). Flat keys win over everything else.

use crate::config::RadarConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads radar configuration from `config/Config.toml`, `WHALE_*`
    /// environment variables, and the flat legacy keys, then validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or validation fails.
    pub fn load() -> Result<RadarConfig> {
        Self::load_from(Some("config/Config.toml"))
    }

    /// Loads configuration from an explicit TOML path (or none at all).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or validation fails.
    pub fn load_from(toml_path: Option<&str>) -> Result<RadarConfig> {
        let mut figment = Figment::new();
        if let Some(path) = toml_path {
            figment = figment.merge(Toml::file(path));
        }
        let mut config: RadarConfig = figment
            .merge(Env::prefixed("WHALE_").split("__"))
            .extract()
            .context("invalid radar configuration")?;

        apply_flat_env(&mut config)?;
        config.validate().context("invalid radar configuration")?;
        Ok(config)
    }
}

/// Applies the flat environment keys onto an already-built config.
fn apply_flat_env(config: &mut RadarConfig) -> Result<()> {
    if let Ok(raw) = std::env::var("MARKETS") {
        config.markets = raw
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Ok(raw) = std::env::var("LOOKBACK_SEC") {
        config.lookback_secs = raw
            .parse()
            .with_context(|| format!("LOOKBACK_SEC is not an integer: {raw:?}"))?;
    }
    for (key, slot) in [
        ("THRESH_NOTIONAL", &mut config.thresholds.notional),
        ("THRESH_NET_BUY", &mut config.thresholds.net_buy),
        ("THRESH_OB_IMB", &mut config.thresholds.ob_imbalance),
    ] {
        if let Ok(raw) = std::env::var(key) {
            *slot = Decimal::from_str(raw.trim())
                .with_context(|| format!("{key} is not a decimal: {raw:?}"))?;
        }
    }
    if let Ok(raw) = std::env::var("NTFY_URL") {
        config.ntfy.url = raw;
    }
    if let Ok(raw) = std::env::var("NTFY_TOPIC") {
        config.ntfy.topic = if raw.trim().is_empty() {
            None
        } else {
            Some(raw)
        };
    }
    Ok(())
}
