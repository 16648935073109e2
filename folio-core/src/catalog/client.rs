//! HTTP implementation of [`Catalog`] over the Open Library REST API

use super::wire::{EditionsResponse, ListingResponse};
use super::{filter_exact_year, Catalog, CatalogResult};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{
    strip_prefix, Author, BookSummary, CoverSize, WorkDetail, AUTHOR_PREFIX, WORK_PREFIX,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Catalog backed by the bibliographic HTTP API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a client with its own connection pool
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client sharing an existing `reqwest::Client`
    pub fn with_http_client(http: reqwest::Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    /// Active configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// GET `path` relative to the API root and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> CatalogResult<T> {
        let url = format!("{}{}", self.config.api_url, path);
        debug!(%url, ?query, "Catalog request");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.json().await?)
    }

    async fn search(&self, query: &[(&str, String)]) -> CatalogResult<Vec<BookSummary>> {
        let listing: ListingResponse = self.get_json("/search.json", query).await?;
        Ok(listing.into_books())
    }
}

/// Lower-case a title and collapse whitespace runs; the query encoder turns
/// the remaining spaces into `+`
fn title_query(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn default_books(&self) -> CatalogResult<Vec<BookSummary>> {
        let path = format!(
            "/subjects/{}.json",
            urlencoding::encode(&self.config.default_subject)
        );
        let listing: ListingResponse = self
            .get_json(&path, &[("limit", self.config.listing_limit.to_string())])
            .await?;
        Ok(listing.into_books())
    }

    async fn search_by_title(&self, title: &str) -> CatalogResult<Vec<BookSummary>> {
        self.search(&[
            ("title", title_query(title)),
            ("limit", self.config.listing_limit.to_string()),
        ])
        .await
    }

    async fn search_by_year(&self, year: i32) -> CatalogResult<Vec<BookSummary>> {
        let books = self
            .search(&[
                ("q", self.config.year_query.clone()),
                ("first_publish_year", year.to_string()),
                ("limit", self.config.search_limit.to_string()),
            ])
            .await?;
        Ok(filter_exact_year(books, year))
    }

    async fn search_by_title_and_year(
        &self,
        title: &str,
        year: i32,
    ) -> CatalogResult<Vec<BookSummary>> {
        let books = self
            .search(&[
                ("q", title_query(title)),
                ("first_publish_year", year.to_string()),
                ("limit", self.config.search_limit.to_string()),
            ])
            .await?;
        Ok(filter_exact_year(books, year))
    }

    async fn work(&self, work_id: &str) -> CatalogResult<WorkDetail> {
        let id = strip_prefix(work_id, WORK_PREFIX);
        let path = format!("/works/{}.json", urlencoding::encode(id));
        self.get_json(&path, &[]).await
    }

    async fn author_name(&self, author_id: &str) -> CatalogResult<String> {
        let id = strip_prefix(author_id, AUTHOR_PREFIX);
        let path = format!("/authors/{}.json", urlencoding::encode(id));
        let author: Author = self.get_json(&path, &[]).await?;
        Ok(author.name)
    }

    async fn first_edition_date(&self, work_id: &str) -> Option<String> {
        let id = strip_prefix(work_id, WORK_PREFIX);
        let path = format!("/works/{}/editions.json", urlencoding::encode(id));
        match self
            .get_json::<EditionsResponse>(&path, &[("limit", "1".to_string())])
            .await
        {
            Ok(editions) => editions.first_publish_date(),
            Err(e) => {
                warn!(work = %id, "Edition lookup failed, no date available: {}", e);
                None
            }
        }
    }

    fn cover_url(&self, cover_id: Option<i64>, size: CoverSize) -> String {
        self.config.cover_url(cover_id, size)
    }
}
