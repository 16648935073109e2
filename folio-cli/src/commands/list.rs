//! List command implementation

use super::{print_listing, spinner};
use anyhow::Result;
use folio_core::{CatalogClient, CatalogConfig, ListView, SearchForm};

/// List the default catalog
pub async fn list(config: CatalogConfig, page: usize, json: bool) -> Result<()> {
    let client = CatalogClient::new(config);
    let mut view = ListView::new();

    let pb = spinner("Loading books...")?;
    view.submit(SearchForm::default(), &client).await;
    pb.finish_and_clear();

    let query = SearchForm::default().query()?.to_string();
    print_listing(&mut view, &client, query, page, json)
}
