//! View state for the list and detail views
//!
//! Views catch failures where they happen: the error is logged and recorded
//! as a flag, never propagated further.

use crate::catalog::{Catalog, CatalogResult};
use crate::detail::{load_details, BookDetails};
use crate::error::ValidationError;
use crate::pagination::Paginator;
use crate::search::{SearchForm, SearchQuery};
use crate::types::BookSummary;
use tracing::error;

/// Loading state of a single fetched value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// State behind the detail page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailView {
    pub state: Loadable<BookDetails>,
}

impl DetailView {
    /// Load the work named by a route parameter
    pub async fn load(catalog: &dyn Catalog, param: &str) -> Self {
        let state = match load_details(catalog, param).await {
            Ok(details) => Loadable::Loaded(details),
            Err(e) => {
                error!(work = %param, "Error loading book details: {}", e);
                Loadable::Failed(e.to_string())
            }
        };
        Self { state }
    }
}

/// State behind the list/search page
#[derive(Debug, Clone, Default)]
pub struct ListView {
    pub form: SearchForm,
    pub books: Paginator<BookSummary>,
    pub loading: bool,
    /// Message of the last failed retrieval
    pub error: Option<String>,
    /// Validation problems that blocked the last submission
    pub validation: Vec<ValidationError>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a retrieval
    ///
    /// Success replaces the list wholesale and returns to page 1. Failure
    /// keeps the previous list and sets the error flag.
    pub fn apply(&mut self, result: CatalogResult<Vec<BookSummary>>) {
        self.loading = false;
        match result {
            Ok(books) => {
                self.error = None;
                self.books.set_items(books);
            }
            Err(e) => {
                error!("Error loading books: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Submit `form`; an invalid form is recorded and nothing is fetched
    pub async fn submit(&mut self, form: SearchForm, catalog: &dyn Catalog) {
        self.form = form;
        self.validation = self.form.errors();
        let query = match self.form.query() {
            Ok(query) => query,
            Err(_) => return,
        };
        self.run(&query, catalog).await;
    }

    /// Clear the form and reload the default catalog
    pub async fn reset(&mut self, catalog: &dyn Catalog) {
        self.validation.clear();
        self.loading = true;
        let result = self.form.reset_and_reload(catalog).await;
        self.apply(result);
    }

    async fn run(&mut self, query: &SearchQuery, catalog: &dyn Catalog) {
        self.loading = true;
        let result = query.run(catalog).await;
        self.apply(result);
    }

    /// Jump to `page`; out-of-range pages are ignored
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.books.go_to_page(page)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
