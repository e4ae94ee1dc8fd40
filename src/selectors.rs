//! CSS selectors for the retailers we parse ourselves, plus the remote
//! selector service used for everything else.
//!
//! Update the hardcoded selectors when Amazon or Flipkart change their HTML
//! structure.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

use crate::models::SelectorSet;

/// Selectors for Amazon product detail pages.
pub mod amazon {
    use super::*;

    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#productTitle").unwrap());

    /// Integer part of the displayed price.
    pub static PRICE_WHOLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-price .a-price-whole").unwrap());

    /// Struck-through list price.
    pub static MRP: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-price.a-text-price .a-offscreen").unwrap());

    /// Older list-price markup, still served on some category pages.
    pub static MRP_ALT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".basisPrice .a-price .a-offscreen").unwrap());

    /// Rating lives in this element's `title` attribute ("4.3 out of 5 stars").
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#acrPopover").unwrap());

    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-dynamic-image.a-stretch-vertical").unwrap());

    pub static IMAGE_ALT: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("span.a-declarative[data-action=\"main-image-click\"] img").unwrap()
    });
}

/// Selectors for Flipkart product detail pages. Flipkart ships obfuscated
/// class names, so these rot faster than the Amazon set.
pub mod flipkart {
    use super::*;

    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".VU-ZEz").unwrap());

    pub static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".Nx9bqj").unwrap());

    pub static MRP: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".yRaY8j").unwrap());

    pub static RATING: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".XQDdHH").unwrap());

    pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".DByuf4").unwrap());
}

/// Source of selector sets for sites we have no hardcoded rules for.
///
/// This is the one network-dependent step of a scrape; tests substitute a
/// stub implementation.
pub trait SelectorProvider {
    /// `None` means "no selectors available" — the caller aborts the scrape
    /// for that site. Never errors.
    fn selectors(&self, website_name: &str) -> Option<SelectorSet>;
}

#[derive(Serialize)]
struct SelectorQuery<'a> {
    website_name: &'a str,
}

/// Fetches selector sets from the remote configuration service.
pub struct HttpSelectorProvider {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSelectorProvider {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SelectorProvider for HttpSelectorProvider {
    fn selectors(&self, website_name: &str) -> Option<SelectorSet> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SelectorQuery { website_name })
            .send();

        match response {
            Ok(res) if res.status().is_success() => match res.json::<SelectorSet>() {
                Ok(set) => Some(set),
                Err(e) => {
                    log::error!("Malformed selector response for {}: {}", website_name, e);
                    None
                }
            },
            Ok(res) => {
                log::error!(
                    "Selector service returned {} for {}",
                    res.status(),
                    website_name
                );
                None
            }
            Err(e) => {
                log::error!("Selector service unreachable for {}: {}", website_name, e);
                None
            }
        }
    }
}
