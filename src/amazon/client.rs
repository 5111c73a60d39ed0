//! HTTP client for fetching search pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::PickError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching a search page - enables mocking for tests.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetches the given URL and returns the raw HTML body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Amazon HTTP client with browser impersonation and anti-bot measures.
pub struct AmazonClient {
    client: Client,
    delay_ms: u64,
    delay_jitter_ms: u64,
}

impl AmazonClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
        })
    }

    /// Adds a random delay to mimic human behavior.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl PageFetch for AmazonClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.delay().await;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", "en-US, en;q=0.5")
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Connection", "keep-alive")
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Rate limited (503). Consider using a proxy or increasing delay.");
            return Err(PickError::Blocked(
                "Rate limited by Amazon. Try increasing --delay or using a proxy.".to_string(),
            )
            .into());
        }

        if !status.is_success() {
            return Err(PickError::Fetch { status: status.as_u16() }.into());
        }

        response.text().await.context("Failed to read response body")
    }
}
