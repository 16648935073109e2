//! JSON API mirroring the pages

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use folio_core::{
    load_details, BookDetails, BookSummary, Catalog, CatalogError, CoverSize, Paginator,
    SearchForm,
};
use serde::{Deserialize, Serialize};

/// Query parameters for listing books
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub year: String,

    /// Page number (1-indexed); out-of-range or unparsable values are treated as 1
    pub page: Option<String>,
}

impl ListBooksQuery {
    fn page(&self) -> Option<usize> {
        self.page.as_deref().and_then(|p| p.parse().ok())
    }
}

/// Book entry in a list response
#[derive(Debug, Serialize)]
pub struct BookCard {
    pub id: String,
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub authors: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub edition_count: Option<u32>,
    pub cover_url: String,
}

impl BookCard {
    fn new(book: &BookSummary, catalog: &dyn Catalog) -> Self {
        Self {
            id: book.id().to_string(),
            key: book.key.clone(),
            title: book.title.clone(),
            subtitle: book.subtitle.clone(),
            authors: book.author_name.clone(),
            first_publish_year: book.first_publish_year,
            edition_count: book.edition_count,
            cover_url: catalog.cover_url(book.cover_id, CoverSize::Medium),
        }
    }
}

/// List response with pagination
#[derive(Debug, Serialize)]
pub struct ListBooksResponse {
    /// Which retrieval path served the request
    pub query: String,
    pub books: Vec<BookCard>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
}

/// Error body for failed API calls
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, details: Vec<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            details,
        }),
    )
}

/// Map an upstream failure; upstream 404 stays 404, everything else is 502
fn upstream_error(e: CatalogError) -> ApiError {
    tracing::error!("Catalog request failed: {}", e);
    let status = match e.status() {
        Some(404) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    api_error(status, e.to_string(), Vec::new())
}

/// List or search books
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<ListBooksResponse>, ApiError> {
    let page = query.page();
    let form = SearchForm::new(query.title, query.year);
    let search = form.query().map_err(|_| {
        let details = form.errors().iter().map(|e| e.to_string()).collect();
        api_error(StatusCode::BAD_REQUEST, "Invalid search", details)
    })?;

    let catalog = state.catalog.as_ref();
    let books = search.run(catalog).await.map_err(upstream_error)?;

    let mut pages = Paginator::new(books);
    if let Some(page) = page {
        pages.go_to_page(page);
    }

    Ok(Json(ListBooksResponse {
        query: search.to_string(),
        books: pages
            .page_items()
            .iter()
            .map(|book| BookCard::new(book, catalog))
            .collect(),
        total: pages.len(),
        page: pages.current_page(),
        per_page: pages.page_size(),
        total_pages: pages.total_pages(),
        page_numbers: pages.page_numbers(),
    }))
}

/// Get a single book's detail view
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetails>, ApiError> {
    load_details(state.catalog.as_ref(), &id)
        .await
        .map(Json)
        .map_err(upstream_error)
}
