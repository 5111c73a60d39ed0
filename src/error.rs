//! Page-level error taxonomy.
//!
//! Only whole-page failures live here. A single bad product card or an
//! unparseable delivery snippet is absorbed where it happens and never
//! becomes an error.

use thiserror::Error;

/// Errors that abort processing of a search page.
#[derive(Debug, Error)]
pub enum PickError {
    /// Non-success HTTP status from the search page fetch. Not retried.
    #[error("request was not successful (status {status})")]
    Fetch { status: u16 },

    /// Amazon served a CAPTCHA or error interstitial instead of results.
    #[error("Amazon is blocking requests: {0}")]
    Blocked(String),
}
