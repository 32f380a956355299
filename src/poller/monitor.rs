//! Periodic feed fetch.
//!
//! # Responsibilities
//! - Fetch the configured URL on startup and on every tick
//! - Log what came back; log and ignore failures
//! - Exit when shutdown is signalled

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};
use url::Url;

use crate::config::PollerConfig;
use crate::observability::metrics;

/// Longest body excerpt written to the log.
const LOG_PREVIEW_CHARS: usize = 512;

#[derive(Debug, Error)]
pub enum PollError {
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned status {0}")]
    Status(u16),
}

pub struct FeedPoller {
    client: reqwest::Client,
    config: PollerConfig,
    url: Url,
}

impl FeedPoller {
    pub fn new(config: PollerConfig) -> Result<Self, PollError> {
        let url = Url::parse(&config.url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config, url })
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.config.enabled {
            tracing::info!("Feed poller disabled");
            return;
        }

        tracing::info!(
            url = %self.url,
            interval_secs = self.config.interval_secs,
            "Feed poller starting"
        );

        // First tick completes immediately, giving the startup fetch.
        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll_once().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Feed poller received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// One fetch with logging; never fails.
    pub async fn poll_once(&self) -> bool {
        match self.fetch().await {
            Ok(body) => {
                let preview: String = body.chars().take(LOG_PREVIEW_CHARS).collect();
                tracing::info!(url = %self.url, bytes = body.len(), body = %preview, "Flight data fetched");
                metrics::record_feed_poll("ok");
                true
            }
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "Error fetching flight data");
                metrics::record_feed_poll("failed");
                false
            }
        }
    }

    pub async fn fetch(&self) -> Result<String, PollError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
