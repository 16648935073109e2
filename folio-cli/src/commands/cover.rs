//! Cover command implementation

use anyhow::Result;
use folio_core::{CatalogConfig, CoverSize};

/// Print the image URL for a cover identifier
pub fn cover(config: &CatalogConfig, cover_id: Option<i64>, size: CoverSize) -> Result<()> {
    println!("{}", config.cover_url(cover_id, size));
    Ok(())
}
