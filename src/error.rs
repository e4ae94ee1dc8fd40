use thiserror::Error;

/// Failures that abort a whole scrape call.
///
/// A selector matching nothing is deliberately not in here: missing fields
/// degrade to sentinel strings and the scrape still returns a record.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The fetched page body was empty, nothing to parse.
    #[error("empty product page for {0}")]
    EmptyDocument(String),

    /// The tracked URL could not be parsed or has no hostname.
    #[error("could not determine hostname of {0}")]
    InvalidUrl(String),

    /// Unknown site and the selector service had nothing for it.
    #[error("no selectors available for {0}")]
    SelectorsUnavailable(String),
}
