//! REST client for Upbit's public market-data endpoints.

use crate::error::{Result, UpbitError};
use crate::models::{OrderbookPayload, TradeTick};
use governor::{clock::DefaultClock, state::InMemoryState, Quota, RateLimiter};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UpbitClient {
    http_client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<governor::state::direct::NotKeyed, InMemoryState, DefaultClock>>,
}

impl UpbitClient {
    /// Creates a client against a base URL (normally `https://api.upbit.com`).
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // Upbit allows 10 quotation requests per second per IP.
        let quota = Quota::per_second(NonZeroU32::new(10).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        self.rate_limiter.until_ready().await;
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(UpbitError::api(status.as_u16(), message));
        }
        Ok(response.json().await?)
    }

    /// Fetches the most recent `count` trades for a market.
    pub async fn trade_ticks(&self, market: &str, count: u32) -> Result<Vec<TradeTick>> {
        self.get(
            "/v1/trades/ticks",
            &[("market", market.to_string()), ("count", count.to_string())],
        )
        .await
    }

    /// Fetches the current order books for one or more markets.
    pub async fn orderbooks(&self, markets: &[&str]) -> Result<Vec<OrderbookPayload>> {
        self.get("/v1/orderbook", &[("markets", markets.join(","))])
            .await
    }
}
