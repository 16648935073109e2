//! Catalog access layer
//!
//! [`Catalog`] is the seam between the views and the bibliographic API.
//! [`CatalogClient`] implements it over HTTP; tests substitute fakes.

mod client;
mod wire;

pub use client::CatalogClient;

use crate::error::CatalogError;
use crate::types::{BookSummary, CoverSize, WorkDetail};
use async_trait::async_trait;

/// Result type for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Read access to a book catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Default listing (a fixed subject)
    async fn default_books(&self) -> CatalogResult<Vec<BookSummary>>;

    /// Search by title
    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookSummary>>;

    /// Search by first-publish year; only exact year matches are returned
    async fn search_by_year(&self, year: i32) -> CatalogResult<Vec<BookSummary>>;

    /// Search by title and first-publish year; only exact year matches are returned
    async fn search_by_title_and_year(
        &self,
        title: &str,
        year: i32,
    ) -> CatalogResult<Vec<BookSummary>>;

    /// Full record for one work; accepts `OL123W` or `/works/OL123W`
    async fn work(&self, work_id: &str) -> CatalogResult<WorkDetail>;

    /// Display name of one author; accepts `OL1A` or `/authors/OL1A`
    async fn author_name(&self, author_id: &str) -> CatalogResult<String>;

    /// Publish date of a work's first listed edition
    ///
    /// Lookup failures are reported as `None` rather than as errors.
    async fn first_edition_date(&self, work_id: &str) -> Option<String>;

    /// Cover image URL, or the placeholder path when there is no cover
    fn cover_url(&self, cover_id: Option<i64>, size: CoverSize) -> String;
}

/// Keep only records first published in exactly `year`
///
/// The upstream search treats the year parameter loosely, so near-miss years
/// come back and must be dropped here.
pub fn filter_exact_year(books: Vec<BookSummary>, year: i32) -> Vec<BookSummary> {
    books
        .into_iter()
        .filter(|book| book.first_publish_year == Some(year))
        .collect()
}
