//! Data models for search-page candidates, delivery estimates, and winners.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A delivery time window within a day ("5 AM - 10 AM").
///
/// Always has both bounds; a lone start or end time is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A resolved delivery estimate: a concrete calendar date plus an optional
/// time window. Relative phrases ("Today", "Tomorrow") are resolved against
/// the caller-supplied clock before one of these is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    pub date: NaiveDate,
    pub window: Option<DeliveryWindow>,
}

impl DeliveryEstimate {
    /// Creates an estimate with no time window.
    pub fn date_only(date: NaiveDate) -> Self {
        Self { date, window: None }
    }

    /// Creates an estimate with a time window.
    pub fn with_window(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, window: Some(DeliveryWindow { start, end }) }
    }
}

impl Ord for DeliveryEstimate {
    /// Earlier date wins. On equal dates an estimate with a time window beats
    /// one without; two windowed estimates compare by start, then end.
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| match (&self.window, &other.window) {
            (Some(a), Some(b)) => a.start.cmp(&b.start).then(a.end.cmp(&b.end)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

impl PartialOrd for DeliveryEstimate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One product listing pulled from a search page, before ranking.
///
/// Every field the rankings do not strictly need is optional; a missing field
/// only disqualifies the candidate from the ranking that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCandidate {
    /// Product title if the card had one.
    pub title: Option<String>,
    /// Full detail-page URL.
    pub url: String,
    /// Price, if present and parseable.
    pub price: Option<f64>,
    /// Star rating in [0.0, 5.0], if present and parseable.
    pub rating: Option<f32>,
    /// Raw delivery-estimate text fragments, in document order.
    pub delivery_snippets: Vec<String>,
}

impl ProductCandidate {
    /// Creates a candidate with just a URL; the parser fills in the rest.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
            price: None,
            rating: None,
            delivery_snippets: Vec::new(),
        }
    }
}

/// The cheapest-product winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedPick {
    pub title: Option<String>,
    pub url: String,
    pub price: f64,
}

/// The highest-rated winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedPick {
    pub title: Option<String>,
    pub url: String,
    pub rating: f32,
}

/// The soonest-delivery winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPick {
    pub title: Option<String>,
    pub url: String,
    pub estimate: DeliveryEstimate,
}

/// The three winners for one search page. Each is `None` when no candidate
/// qualified for that ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingResult {
    pub cheapest: Option<PricedPick>,
    pub highest_rated: Option<RatedPick>,
    pub soonest: Option<DeliveryPick>,
}

impl RankingResult {
    /// Returns true if no ranking produced a winner.
    pub fn is_empty(&self) -> bool {
        self.cheapest.is_none() && self.highest_rated.is_none() && self.soonest.is_none()
    }
}
