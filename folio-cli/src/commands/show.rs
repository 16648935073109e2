//! Show command implementation

use super::spinner;
use anyhow::{Context, Result};
use folio_core::{load_details, CatalogClient, CatalogConfig};
use tracing::debug;

/// Display details of a single work
pub async fn show(config: CatalogConfig, id: &str, json: bool) -> Result<()> {
    let client = CatalogClient::new(config);
    debug!("Loading work {} from {}", id, client.config().api_url);

    let pb = spinner("Loading book...")?;
    let result = load_details(&client, id).await;
    pb.finish_and_clear();

    let details = result.with_context(|| format!("Could not load book {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("Title:       {}", details.title);
    if let Some(subtitle) = &details.subtitle {
        println!("Subtitle:    {}", subtitle);
    }
    if !details.authors.is_empty() {
        println!("Authors:     {}", details.authors.join(", "));
    }
    println!("Published:   {}", details.publication_date);
    if let Some(pages) = details.number_of_pages {
        println!("Pages:       {}", pages);
    }
    if !details.isbn_13.is_empty() {
        println!("ISBN-13:     {}", details.isbn_13.join(", "));
    }
    if !details.subjects.is_empty() {
        println!("Subjects:    {}", details.subjects.join(", "));
    }
    println!("Cover:       {}", details.cover_url);
    println!();
    println!("{}", details.description);

    Ok(())
}
