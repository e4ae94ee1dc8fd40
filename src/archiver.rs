use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::ProductData;

/// One line of the local archive: the record plus when it was scraped. The
/// timestamp lives here rather than on [`ProductData`] so parsing stays a
/// pure function of its inputs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub scraped_at: String,
    pub product: ProductData,
}

/// Append one scraped record to the JSON archive. This is the local stand-in
/// for the product/product-image tables of the backend proper.
pub fn save_to_file(product: &ProductData, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut entries: Vec<ArchiveEntry> = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)?,
        Err(_) => Vec::new(),
    };

    entries.push(ArchiveEntry {
        scraped_at: chrono::Utc::now().to_rfc3339(),
        product: product.clone(),
    });

    fs::write(path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}
