//! HTML extractor for Amazon search-results pages.

use crate::amazon::models::ProductCandidate;
use crate::amazon::selectors::{errors, search};
use crate::error::PickError;
use anyhow::{Context, Result};
use scraper::{ElementRef, Html};
use tracing::{debug, trace, warn};

/// Base URL joined onto relative detail-page links.
pub const AMAZON_BASE_URL: &str = "https://www.amazon.com";

/// Extracts product candidates from search-results HTML.
pub struct Parser {
    base_url: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser joining relative links to the Amazon domain.
    pub fn new() -> Self {
        Self::with_base_url(AMAZON_BASE_URL)
    }

    /// Creates a parser with a custom link prefix (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Parses search-results HTML into candidates, in page order.
    ///
    /// A card that fails extraction is logged and dropped; one malformed
    /// listing never poisons the rest of the page. Only a CAPTCHA or error
    /// interstitial fails the whole page.
    pub fn parse_search(&self, html: &str) -> Result<Vec<ProductCandidate>> {
        let document = Html::parse_document(html);

        self.check_for_errors(&document)?;

        let mut candidates = Vec::new();

        for element in document.select(&search::RESULT) {
            match self.parse_card(element) {
                Ok(candidate) => {
                    trace!("Extracted candidate: {}", candidate.url);
                    candidates.push(candidate);
                }
                Err(e) => {
                    warn!("Failed to extract product card: {}", e);
                    // Continue with the remaining cards
                }
            }
        }

        debug!("Extracted {} candidates from page", candidates.len());

        Ok(candidates)
    }

    /// Checks for CAPTCHA or Amazon error pages.
    fn check_for_errors(&self, document: &Html) -> Result<()> {
        if document.select(&errors::CAPTCHA).next().is_some() {
            return Err(PickError::Blocked(
                "CAPTCHA detected. Try using a proxy or waiting before retrying.".to_string(),
            )
            .into());
        }

        if document.select(&errors::DOG_PAGE).next().is_some() {
            return Err(PickError::Blocked(
                "Amazon error page detected (503). The service may be temporarily unavailable."
                    .to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Extracts one candidate from a result card.
    ///
    /// The detail link is the only mandatory field. Price and rating degrade
    /// to `None` when absent or garbled, keeping the candidate eligible for
    /// the rankings that do not need them.
    fn parse_card(&self, element: ElementRef) -> Result<ProductCandidate> {
        let href = element
            .select(&search::LINK)
            .next()
            .and_then(|e| e.value().attr("href"))
            .context("product card has no detail link")?;

        let url = if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        };

        let title = element
            .select(&search::TITLE)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string());

        let price = element
            .select(&search::PRICE)
            .next()
            .and_then(|e| Self::parse_price(&e.text().collect::<String>()));

        let rating = element
            .select(&search::RATING)
            .next()
            .and_then(|e| Self::parse_rating(&e.text().collect::<String>()));

        let delivery_snippets = element
            .select(&search::DELIVERY)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .collect();

        Ok(ProductCandidate { title, url, price, rating, delivery_snippets })
    }

    /// Parses a price from text like "$1,234.56".
    fn parse_price(text: &str) -> Option<f64> {
        let cleaned = text.replace(['$', ','], "");
        let price: f64 = cleaned.trim().parse().ok()?;

        if price > 0.0 {
            Some(price)
        } else {
            None
        }
    }

    /// Extracts the star rating from text like "4.5 out of 5 stars".
    fn parse_rating(text: &str) -> Option<f32> {
        let stars: f32 = text.split_whitespace().next()?.parse().ok()?;
        Some(stars.clamp(0.0, 5.0))
    }
}
