//! The pick command: fetch one search page, report the three winners.

use crate::amazon::{AmazonClient, PageFetch, Parser};
use crate::config::Config;
use crate::format::Formatter;
use crate::ranking;
use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info};

/// Required prefix for an Amazon search-results URL.
pub const SEARCH_URL_PREFIX: &str = "https://www.amazon.com/s?";

/// Returns true if the URL points at an Amazon search-results page.
pub fn is_search_url(url: &str) -> bool {
    url.starts_with(SEARCH_URL_PREFIX)
}

/// Fetches a search page and picks the cheapest, highest-rated, and
/// soonest-arriving products.
pub struct PickCommand {
    config: Config,
}

impl PickCommand {
    /// Creates a new pick command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the command and returns formatted output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_fetcher(&client, url).await
    }

    /// Executes the command with a provided fetcher (for testing).
    pub async fn execute_with_fetcher(
        &self,
        fetcher: &impl PageFetch,
        url: &str,
    ) -> Result<String> {
        anyhow::ensure!(is_search_url(url), "Not an Amazon search URL: {}", url);

        info!("Fetching search page: {}", url);
        let html = fetcher.fetch(url).await?;

        let parser = Parser::new();
        let candidates = parser.parse_search(&html)?;
        debug!("Ranking {} candidates", candidates.len());

        let result = ranking::rank(&candidates, Local::now().naive_local());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_result(&result))
    }
}
