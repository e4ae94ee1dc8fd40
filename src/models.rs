use serde::{Serialize, Deserialize};

/// Placeholder written into a field when the page did not yield real data.
/// Every field of [`ProductData`] is always populated with either scraped text
/// or its sentinel, never left empty.
pub const TITLE_UNAVAILABLE: &str = "Title not available";
pub const PRICE_UNAVAILABLE: &str = "Price not available";
pub const MRP_UNAVAILABLE: &str = "MRP not available";
pub const RATING_UNAVAILABLE: &str = "Rating not available";
pub const IMAGE_UNAVAILABLE: &str = "Image not available";

/// Normalized record produced by one scrape of a tracked product page.
///
/// `product_tracking_url` and `slug` carry the input URL verbatim.
/// `website_name` is a display label only; the persistence layer ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    pub price: String,
    pub original_price: String,
    pub customer_rating: String,
    pub image: String,
    pub product_tracking_url: String,
    pub slug: String,
    pub website_name: String,
}

/// Field-name to CSS-selector mapping returned by the selector service for
/// sites without hardcoded rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSet {
    pub title: String,
    pub current: String,
    pub mrp: String,
    pub rating: String,
    pub image: String,
}

/// Which retailer a product URL belongs to, resolved once per scrape from the
/// URL's hostname. Unknown sites carry the selectors fetched for them.
#[derive(Debug, Clone, PartialEq)]
pub enum Site {
    Amazon,
    Flipkart,
    Other(SelectorSet),
}

impl Site {
    pub fn display_name(&self) -> &'static str {
        match self {
            Site::Amazon => "Amazon",
            Site::Flipkart => "Flipkart",
            Site::Other(_) => "Unknown Website",
        }
    }
}
