//! CSS selectors for Amazon search-results pages.
//!
//! All selectors used for pulling candidate fields live here. Update this
//! file when Amazon changes their HTML structure.
//!
//! **Update process**: When extraction fails, capture HTML sample,
//! update selectors, and add test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for search results pages.
pub mod search {
    use super::*;

    /// Product card container - main search result item.
    pub static RESULT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[data-component-type='s-search-result']").unwrap());

    /// Product title text.
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.a-size-medium, \
             span.a-size-base-plus",
        )
        .unwrap()
    });

    /// Detail-page link; the first matching anchor on the card.
    pub static LINK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a.a-link-normal").unwrap());

    /// Offscreen price text (most reliable price source).
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-offscreen").unwrap());

    /// Star rating text ("4.5 out of 5 stars").
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-icon-alt").unwrap());

    /// Delivery-estimate fragments ("Today 5 AM - 10 AM", "Wed, Jan 15").
    pub static DELIVERY: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-color-base.a-text-bold").unwrap());
}

/// Selectors for detecting error/captcha pages.
pub mod errors {
    use super::*;

    /// CAPTCHA form.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             img[src*='captcha']",
        )
        .unwrap()
    });

    /// Dog page (Amazon's error page).
    pub static DOG_PAGE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "img[alt*='dog'], \
             .a-box-inner a[href='/ref=cs_503_link']",
        )
        .unwrap()
    });
}
