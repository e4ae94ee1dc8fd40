use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_SELECTOR_SERVICE_URL: &str = "https://cron-job-9njv.onrender.com/selector";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Endpoint answering selector lookups for sites without hardcoded rules.
    #[serde(default = "default_selector_service_url")]
    pub selector_service_url: String,
    /// ScraperAPI key. When set, product pages are fetched through the
    /// rendering proxy instead of directly.
    #[serde(default)]
    pub scraper_api_key: Option<String>,
}

fn default_selector_service_url() -> String {
    DEFAULT_SELECTOR_SERVICE_URL.to_string()
}

/// Read settings from `COCART_`-prefixed environment variables, e.g.
/// `COCART_SCRAPER_API_KEY`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(Environment::with_prefix("COCART"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.selector_service_url, DEFAULT_SELECTOR_SERVICE_URL);
        assert!(settings.scraper_api_key.is_none());
    }
}
