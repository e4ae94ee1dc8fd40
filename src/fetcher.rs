use reqwest::blocking::Client;
use reqwest::redirect;

use crate::config::Settings;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const RENDER_API_URL: &str = "https://api.scraperapi.com";

pub fn build_client() -> Result<Client, reqwest::Error> {
    let redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > 10 {
            attempt.error("Too many redirects (>10)")
        } else {
            attempt.follow()
        }
    });

    Client::builder().redirect(redirect_policy).build()
}

/// Fetch a product page, routed through the rendering proxy when an API key
/// is configured (retailer pages render their price blocks client-side).
pub fn fetch_product_page(
    client: &Client,
    settings: &Settings,
    url: &str,
) -> Result<String, reqwest::Error> {
    let request = match &settings.scraper_api_key {
        Some(key) => client
            .get(RENDER_API_URL)
            .query(&[("api_key", key.as_str()), ("url", url)]),
        None => client.get(url),
    };

    request
        .header("User-Agent", USER_AGENT)
        .send()?
        .error_for_status()?
        .text()
}
