use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ScrapeError;
use crate::models::{
    ProductData, SelectorSet, Site, IMAGE_UNAVAILABLE, MRP_UNAVAILABLE, PRICE_UNAVAILABLE,
    RATING_UNAVAILABLE, TITLE_UNAVAILABLE,
};
use crate::selectors::{amazon, flipkart, SelectorProvider};

struct ExtractedFields {
    name: String,
    price: String,
    original_price: String,
    customer_rating: String,
    image: String,
}

/// Scrape the product fields out of a fetched page.
///
/// This is a pure function of the page body, the URL, and the selector set in
/// play; the same inputs always produce the same record. Missing fields
/// degrade to their sentinel strings — the only hard failures are an empty
/// page body, an unusable URL, and an unknown site the selector service has
/// nothing for.
pub fn scrape_product_data(
    html: &str,
    url: &str,
    provider: &dyn SelectorProvider,
) -> Result<ProductData, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::EmptyDocument(url.to_string()));
    }
    let doc = Html::parse_document(html);

    let hostname = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| ScrapeError::InvalidUrl(url.to_string()))?;

    let site = resolve_site(&hostname, provider)?;
    let fields = match &site {
        Site::Amazon => extract_amazon(&doc),
        Site::Flipkart => extract_flipkart(&doc),
        Site::Other(set) => extract_with_selector_set(&doc, set),
    };

    Ok(ProductData {
        name: fields.name,
        price: fields.price,
        original_price: fields.original_price,
        customer_rating: fields.customer_rating,
        image: fields.image,
        product_tracking_url: url.to_string(),
        slug: url.to_string(),
        website_name: site.display_name().to_string(),
    })
}

/// Pick the extraction rules for a hostname. Unknown hostnames cost one call
/// to the selector service; if it has nothing, the whole scrape is off.
pub fn resolve_site(hostname: &str, provider: &dyn SelectorProvider) -> Result<Site, ScrapeError> {
    if hostname.contains("amazon") {
        Ok(Site::Amazon)
    } else if hostname.contains("flipkart") {
        Ok(Site::Flipkart)
    } else {
        provider
            .selectors(hostname)
            .map(Site::Other)
            .ok_or_else(|| ScrapeError::SelectorsUnavailable(hostname.to_string()))
    }
}

/// Single normalization point for every field lookup: trimmed text of the
/// element, or the named attribute's value, or `None` when either is absent.
pub fn extract_value(element: Option<ElementRef<'_>>, attr: Option<&str>) -> Option<String> {
    let element = element?;
    match attr {
        Some(name) => element.value().attr(name).map(str::to_string),
        None => Some(element.text().collect::<String>().trim().to_string()),
    }
}

fn first_match<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// Selector strings from the service are parsed at runtime; an unparsable one
/// behaves like a selector that matched nothing.
fn first_dynamic_match<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => doc.select(&sel).next(),
        Err(_) => {
            log::warn!("Unusable selector from service: {}", selector);
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// "4.3 out of 5 stars" -> "4.3". Anything without the "out of" phrase is not
/// a rating we trust.
fn leading_rating(phrase: &str) -> Option<String> {
    if phrase.contains("out of") {
        phrase.split_whitespace().next().map(str::to_string)
    } else {
        None
    }
}

/// Full-resolution image URL when the page carries one, else the plain `src`.
fn image_url(element: Option<ElementRef<'_>>) -> Option<String> {
    extract_value(element, Some("data-old-hires")).or_else(|| extract_value(element, Some("src")))
}

fn extract_amazon(doc: &Html) -> ExtractedFields {
    let name = extract_value(first_match(doc, &amazon::TITLE), None)
        .and_then(non_empty)
        .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string());

    let price = extract_value(first_match(doc, &amazon::PRICE_WHOLE), None)
        .and_then(non_empty)
        .map(|whole| format!("₹{}", whole))
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

    let original_price = extract_value(first_match(doc, &amazon::MRP), None)
        .and_then(non_empty)
        .or_else(|| extract_value(first_match(doc, &amazon::MRP_ALT), None).and_then(non_empty))
        .unwrap_or_else(|| MRP_UNAVAILABLE.to_string());

    let customer_rating = extract_value(first_match(doc, &amazon::RATING), Some("title"))
        .and_then(|text| leading_rating(&text))
        .unwrap_or_else(|| RATING_UNAVAILABLE.to_string());

    let image = image_url(first_match(doc, &amazon::IMAGE))
        .or_else(|| image_url(first_match(doc, &amazon::IMAGE_ALT)))
        .unwrap_or_else(|| IMAGE_UNAVAILABLE.to_string());

    ExtractedFields {
        name,
        price,
        original_price,
        customer_rating,
        image,
    }
}

fn extract_flipkart(doc: &Html) -> ExtractedFields {
    let name = extract_value(first_match(doc, &flipkart::TITLE), None)
        .and_then(non_empty)
        .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string());

    // Flipkart prints the currency in the element text already.
    let price = extract_value(first_match(doc, &flipkart::PRICE), None)
        .and_then(non_empty)
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

    let original_price = extract_value(first_match(doc, &flipkart::MRP), None)
        .and_then(non_empty)
        .unwrap_or_else(|| MRP_UNAVAILABLE.to_string());

    let customer_rating = extract_value(first_match(doc, &flipkart::RATING), None)
        .and_then(non_empty)
        .unwrap_or_else(|| RATING_UNAVAILABLE.to_string());

    let image = extract_value(first_match(doc, &flipkart::IMAGE), Some("src"))
        .and_then(non_empty)
        .unwrap_or_else(|| IMAGE_UNAVAILABLE.to_string());

    ExtractedFields {
        name,
        price,
        original_price,
        customer_rating,
        image,
    }
}

fn extract_with_selector_set(doc: &Html, set: &SelectorSet) -> ExtractedFields {
    let name = extract_value(first_dynamic_match(doc, &set.title), None)
        .and_then(non_empty)
        .unwrap_or_else(|| TITLE_UNAVAILABLE.to_string());

    let price = extract_value(first_dynamic_match(doc, &set.current), None)
        .and_then(non_empty)
        .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

    let original_price = extract_value(first_dynamic_match(doc, &set.mrp), None)
        .and_then(non_empty)
        .unwrap_or_else(|| MRP_UNAVAILABLE.to_string());

    let customer_rating = extract_value(first_dynamic_match(doc, &set.rating), None)
        .and_then(non_empty)
        .unwrap_or_else(|| RATING_UNAVAILABLE.to_string());

    let image = extract_value(first_dynamic_match(doc, &set.image), Some("src"))
        .and_then(non_empty)
        .unwrap_or_else(|| IMAGE_UNAVAILABLE.to_string());

    ExtractedFields {
        name,
        price,
        original_price,
        customer_rating,
        image,
    }
}
