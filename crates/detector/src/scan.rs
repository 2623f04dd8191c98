//! Per-run scan orchestration.
//!
//! One pass fetches and evaluates every configured market, bounded by a
//! fetch-concurrency limit and an overall deadline. Failures and timeouts
//! stay contained to their market; the composer always receives whatever
//! partial signal set was gathered.

use crate::alert::{compose, MarketSignals};
use crate::evaluator::{evaluate, Thresholds};
use crate::imbalance::book_imbalance;
use crate::window::aggregate_window;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use whale_radar_core::{Alert, AlertSender, MarketDataProvider, RadarConfig, Signal};

/// Title carried by every composed alert.
pub const ALERT_TITLE: &str = "Upbit whale radar";

/// Outcome of one scan pass.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Markets fetched and evaluated.
    pub markets_scanned: usize,
    /// Markets skipped because their fetch failed.
    pub markets_failed: usize,
    /// Markets abandoned at the run deadline.
    pub markets_abandoned: usize,
    /// The composed alert, if any market signalled.
    pub alert: Option<Alert>,
    /// Whether the alert reached the sender without error.
    pub delivered: bool,
}

/// Runs one detection pass over the configured markets.
///
/// Stateless across runs: holds only configuration and collaborators.
pub struct Scanner {
    config: RadarConfig,
    thresholds: Thresholds,
    provider: Arc<dyn MarketDataProvider>,
    sender: Arc<dyn AlertSender>,
}

impl Scanner {
    pub fn new(
        config: RadarConfig,
        provider: Arc<dyn MarketDataProvider>,
        sender: Arc<dyn AlertSender>,
    ) -> Self {
        let thresholds = Thresholds::from(&config.thresholds);
        Self {
            config,
            thresholds,
            provider,
            sender,
        }
    }

    /// Runs one pass against the current wall clock.
    pub async fn run(&self) -> ScanReport {
        self.run_at(Utc::now().timestamp_millis()).await
    }

    /// Runs one pass with an injected reference timestamp.
    ///
    /// Per-market fetches run concurrently up to the configured limit; the
    /// whole pass is bounded by the run deadline, after which unfinished
    /// markets are abandoned and whatever was gathered is still composed.
    pub async fn run_at(&self, now_ms: i64) -> ScanReport {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_fetches));
        let mut tasks: JoinSet<(usize, String, Result<Vec<Signal>>)> = JoinSet::new();

        for (index, market) in self.config.markets.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&semaphore);
            let market = market.clone();
            let trade_count = self.config.trade_count;
            let depth = self.config.orderbook_depth;
            let lookback = self.config.lookback();
            let thresholds = self.thresholds;
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                let result = scan_market(
                    provider.as_ref(),
                    &market,
                    trade_count,
                    depth,
                    lookback,
                    now_ms,
                    &thresholds,
                )
                .await;
                (index, market, result)
            });
        }

        let deadline = tokio::time::Instant::now() + self.config.run_deadline();
        let mut report = ScanReport::default();
        let mut evaluated: Vec<(usize, MarketSignals)> = Vec::new();

        loop {
            match tokio::time::timeout_at(deadline, tasks.join_next()).await {
                Ok(Some(Ok((index, market, Ok(signals))))) => {
                    debug!(%market, signal_count = signals.len(), "market evaluated");
                    report.markets_scanned += 1;
                    evaluated.push((index, MarketSignals { market, signals }));
                }
                Ok(Some(Ok((_, market, Err(err))))) => {
                    warn!(%market, cause = %err, "market fetch failed, skipping this run");
                    report.markets_failed += 1;
                }
                Ok(Some(Err(err))) => {
                    warn!(cause = %err, "market task panicked, skipping this run");
                    report.markets_failed += 1;
                }
                Ok(None) => break,
                Err(_) => {
                    report.markets_abandoned = tasks.len();
                    warn!(
                        abandoned = report.markets_abandoned,
                        "run deadline hit, composing with partial results"
                    );
                    tasks.abort_all();
                    break;
                }
            }
        }

        // Back to configured market order so alert lines are deterministic.
        evaluated.sort_by_key(|(index, _)| *index);
        let entries: Vec<MarketSignals> =
            evaluated.into_iter().map(|(_, entry)| entry).collect();

        report.alert = compose(ALERT_TITLE, &entries);
        match &report.alert {
            Some(alert) => {
                info!(body = %alert.body, "whale signal detected");
                match self.sender.send(alert).await {
                    Ok(()) => report.delivered = true,
                    Err(err) => error!(cause = %err, "alert delivery failed"),
                }
            }
            None => info!("no whale signal"),
        }
        report
    }
}

async fn scan_market(
    provider: &dyn MarketDataProvider,
    market: &str,
    trade_count: u32,
    depth: usize,
    lookback: Duration,
    now_ms: i64,
    thresholds: &Thresholds,
) -> Result<Vec<Signal>> {
    let trades = provider.recent_trades(market, trade_count).await?;
    let book = provider.order_book(market).await?;
    let totals = aggregate_window(&trades, lookback, now_ms);
    let imbalance = book_imbalance(&book, depth);
    Ok(evaluate(market, totals, imbalance, thresholds))
}
