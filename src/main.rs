use anyhow::Result;
use env_logger::Env;

use cocart_product_monitor::archiver;
use cocart_product_monitor::config::get_configuration;
use cocart_product_monitor::fetcher;
use cocart_product_monitor::parser::scrape_product_data;
use cocart_product_monitor::selectors::HttpSelectorProvider;

const ARCHIVE_FILE: &str = "archive.json";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        anyhow::bail!("usage: cocart_product_monitor <product-url>...");
    }

    let settings = get_configuration()?;
    let client = fetcher::build_client()?;
    let provider = HttpSelectorProvider::new(settings.selector_service_url.clone());

    // One monitoring pass over the tracked URLs. A product that fails now is
    // simply retried on the next cycle.
    for url in &urls {
        let html = match fetcher::fetch_product_page(&client, &settings, url) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to fetch {}: {}", url, e);
                continue;
            }
        };

        match scrape_product_data(&html, url, &provider) {
            Ok(product) => {
                log::info!("Scraped \"{}\" from {}", product.name, product.website_name);
                archiver::save_to_file(&product, ARCHIVE_FILE)?;
            }
            Err(e) => log::error!("Skipping {}: {}", url, e),
        }
    }

    Ok(())
}
