//! Amazon-specific modules for the HTTP client, page extraction, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{AmazonClient, PageFetch};
pub use models::{DeliveryEstimate, DeliveryWindow, ProductCandidate, RankingResult};
pub use parser::Parser;
