//! `AlertSender` implementations.

use crate::error::NotifyError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use whale_radar_core::{Alert, AlertSender};

const PUSH_TIMEOUT: Duration = Duration::from_secs(15);

/// Pushes alerts to an ntfy topic.
pub struct NtfySender {
    http_client: Client,
    topic_url: String,
}

impl NtfySender {
    /// Creates a sender for `{base_url}/{topic}`.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, topic: &str) -> Result<Self> {
        let http_client = Client::builder().timeout(PUSH_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            topic_url: format!("{}/{topic}", base_url.trim_end_matches('/')),
        })
    }

    async fn push(&self, alert: &Alert) -> std::result::Result<(), NotifyError> {
        let response = self
            .http_client
            .post(&self.topic_url)
            .header("Title", &alert.title)
            .body(alert.body.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(NotifyError::Rejected {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AlertSender for NtfySender {
    async fn send(&self, alert: &Alert) -> Result<()> {
        self.push(alert).await?;
        info!(title = %alert.title, "alert pushed");
        Ok(())
    }
}

/// Fallback sender used when no ntfy topic is configured: the alert is
/// computed and logged, never delivered.
pub struct LogSender;

#[async_trait]
impl AlertSender for LogSender {
    async fn send(&self, alert: &Alert) -> Result<()> {
        info!(title = %alert.title, body = %alert.body, "no ntfy topic set; alert logged only");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_url_trims_trailing_slash() {
        let sender = NtfySender::new("https://ntfy.sh/", "whales").unwrap();
        assert_eq!(sender.topic_url, "https://ntfy.sh/whales");
    }

    #[tokio::test]
    async fn log_sender_always_succeeds() {
        let alert = Alert {
            title: "radar".to_string(),
            body: "[KRW-BTC] large notional 1,100".to_string(),
        };
        LogSender.send(&alert).await.unwrap();
    }
}
