//! Folio Core Library
//!
//! This crate provides the catalog client, record types and view logic for
//! Folio, a browser for the Open Library bibliographic catalog. Listings and
//! searches are normalized into [`BookSummary`] records, paginated client-side,
//! and single works are resolved into [`BookDetails`] for display.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
pub mod view;

pub use catalog::{filter_exact_year, Catalog, CatalogClient, CatalogResult};
pub use config::CatalogConfig;
pub use detail::{load_details, BookDetails, NO_DESCRIPTION, UNKNOWN_DATE};
pub use error::{CatalogError, FolioError, Result, ValidationError};
pub use pagination::{Paginator, MAX_PAGE_BUTTONS, PAGE_SIZE};
pub use search::{SearchForm, SearchQuery};
pub use types::{Author, AuthorRole, BookSummary, CoverSize, Description, WorkDetail};
pub use view::{DetailView, ListView, Loadable};
