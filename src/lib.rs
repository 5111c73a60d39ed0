//! amz-bestpick - pick the best products from one Amazon search page
//!
//! Fetches a single search-results page and reports three winners: the
//! cheapest product, the highest-rated product, and the one with the
//! earliest estimated delivery.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod delivery;
pub mod error;
pub mod format;
pub mod ranking;

pub use amazon::models::{DeliveryEstimate, ProductCandidate, RankingResult};
pub use config::Config;
pub use error::PickError;
