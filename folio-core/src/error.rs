//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that occur while talking to the bibliographic API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

impl CatalogError {
    /// HTTP status reported by the upstream API, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            CatalogError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Errors raised by search form validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must be at least {min} characters")]
    TitleTooShort { min: usize },

    #[error("Year must be exactly four digits, got '{0}'")]
    InvalidYear(String),
}
