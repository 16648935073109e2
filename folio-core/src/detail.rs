//! Detail view model for a single work
//!
//! Loading a work takes three steps. First the work record is fetched. Then
//! author names and the display date are resolved concurrently. Author
//! lookups are joined all-or-nothing.

use crate::catalog::{Catalog, CatalogResult};
use crate::types::{strip_prefix, CoverSize, WorkDetail, WORK_PREFIX};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Date shown when no source yields a publication date
pub const UNKNOWN_DATE: &str = "Unknown";

/// Description shown when the work has none
pub const NO_DESCRIPTION: &str = "No description available.";

/// Everything the detail page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDetails {
    /// Bare work identifier
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub cover_url: String,
    pub authors: Vec<String>,
    pub publication_date: String,
    pub number_of_pages: Option<u32>,
    pub isbn_13: Vec<String>,
    pub subjects: Vec<String>,
}

impl BookDetails {
    fn assemble(
        id: &str,
        work: WorkDetail,
        authors: Vec<String>,
        publication_date: String,
        cover_url: String,
    ) -> Self {
        let description = work
            .description
            .as_ref()
            .and_then(|d| d.text())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            id: id.to_string(),
            title: work.title,
            subtitle: work.subtitle.filter(|s| !s.is_empty()),
            description,
            cover_url,
            authors,
            publication_date,
            number_of_pages: work.number_of_pages,
            isbn_13: work.isbn_13,
            subjects: work.subjects,
        }
    }
}

/// Turn a route parameter (`OL1W`, `/works/OL1W` or `works/OL1W`) into a
/// bare work identifier
pub fn resolve_work_id(param: &str) -> &str {
    let param = param.trim();
    let param = strip_prefix(param, WORK_PREFIX);
    strip_prefix(param, &WORK_PREFIX[1..])
}

/// Display date, by priority: explicit date string, explicit year, first
/// edition's date, then [`UNKNOWN_DATE`]
pub async fn publication_date(catalog: &dyn Catalog, work_id: &str, work: &WorkDetail) -> String {
    if let Some(date) = work.first_publish_date.as_deref().filter(|d| !d.is_empty()) {
        return date.to_string();
    }
    if let Some(year) = work.first_publish_year {
        return year.to_string();
    }

    debug!(work = %work_id, "No publish date on work, checking editions");
    catalog
        .first_edition_date(work_id)
        .await
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Resolve every author reference; fails if any single lookup fails
pub async fn author_names(catalog: &dyn Catalog, work: &WorkDetail) -> CatalogResult<Vec<String>> {
    try_join_all(work.author_keys().into_iter().map(|key| catalog.author_name(key))).await
}

/// Fetch a work and resolve everything its detail page needs
///
/// Only the work fetch itself can fail. A failed author join is logged and
/// leaves the author list empty.
pub async fn load_details(catalog: &dyn Catalog, param: &str) -> CatalogResult<BookDetails> {
    let id = resolve_work_id(param);
    let work = catalog.work(id).await?;

    let (authors, date) = tokio::join!(
        author_names(catalog, &work),
        publication_date(catalog, id, &work)
    );

    let authors = authors.unwrap_or_else(|e| {
        error!(work = %id, "Error loading authors: {}", e);
        Vec::new()
    });

    let cover_url = catalog.cover_url(work.primary_cover(), CoverSize::Large);
    Ok(BookDetails::assemble(id, work, authors, date, cover_url))
}
