//! Search command implementation

use super::{print_listing, spinner};
use anyhow::{bail, Result};
use folio_core::{CatalogClient, CatalogConfig, ListView, SearchForm};
use tracing::debug;

/// Search by title and/or year, then print one page of results
pub async fn search(
    config: CatalogConfig,
    title: &str,
    year: &str,
    page: usize,
    json: bool,
) -> Result<()> {
    let form = SearchForm::new(title, year);
    let issues = form.errors();
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(|e| e.to_string()).collect();
        bail!("Invalid search: {}", messages.join("; "));
    }
    let query = form.query()?.to_string();
    debug!("Running {}", query);

    let client = CatalogClient::new(config);
    let mut view = ListView::new();

    let pb = spinner("Searching...")?;
    view.submit(form, &client).await;
    pb.finish_and_clear();

    print_listing(&mut view, &client, query, page, json)
}
