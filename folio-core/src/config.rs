//! Catalog configuration
//!
//! Defaults point at the public Open Library service. Every value can be
//! overridden through `FOLIO_*` environment variables.

use crate::types::CoverSize;

/// Default API host
pub const DEFAULT_API_URL: &str = "https://openlibrary.org";

/// Default cover image host
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Image path used when a record has no cover
pub const DEFAULT_PLACEHOLDER: &str = "/placeholder-book.png";

/// Settings for reaching the bibliographic API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the API (no trailing slash)
    pub api_url: String,

    /// Base URL of the cover image service (no trailing slash)
    pub covers_url: String,

    /// Path returned for records without a cover
    pub placeholder: String,

    /// Subject listed as the default catalog
    pub default_subject: String,

    /// Page size requested for the default catalog and title searches
    pub listing_limit: u32,

    /// Page size requested for year-filtered searches
    pub search_limit: u32,

    /// Broad query term for year-only searches (upstream requires a `q`)
    pub year_query: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_subject: "computer_science".to_string(),
            listing_limit: 50,
            search_limit: 100,
            year_query: "book".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build a configuration from `FOLIO_API_URL`, `FOLIO_COVERS_URL` and
    /// `FOLIO_PLACEHOLDER`, falling back to the defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FOLIO_API_URL") {
            config = config.with_api_url(url);
        }
        if let Ok(url) = std::env::var("FOLIO_COVERS_URL") {
            config = config.with_covers_url(url);
        }
        if let Ok(path) = std::env::var("FOLIO_PLACEHOLDER") {
            config.placeholder = path;
        }
        config
    }

    /// Point the client at another API host
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Point cover URLs at another image host
    pub fn with_covers_url(mut self, url: impl Into<String>) -> Self {
        self.covers_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Cover image URL for a cover identifier
    ///
    /// Missing, zero and negative identifiers (upstream uses `-1` for "no
    /// cover") resolve to the placeholder path.
    pub fn cover_url(&self, cover_id: Option<i64>, size: CoverSize) -> String {
        match cover_id {
            Some(id) if id > 0 => format!("{}/b/id/{}-{}.jpg", self.covers_url, id, size),
            _ => self.placeholder.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_url_large() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.cover_url(Some(12345), CoverSize::Large),
            "https://covers.openlibrary.org/b/id/12345-L.jpg"
        );
    }

    #[test]
    fn test_cover_url_without_id_is_placeholder() {
        let config = CatalogConfig::default();
        assert_eq!(config.cover_url(None, CoverSize::Medium), "/placeholder-book.png");
        assert_eq!(config.cover_url(Some(0), CoverSize::Small), "/placeholder-book.png");
        assert_eq!(config.cover_url(Some(-1), CoverSize::Large), "/placeholder-book.png");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = CatalogConfig::default()
            .with_api_url("http://127.0.0.1:1234/")
            .with_covers_url("http://covers.test/");
        assert_eq!(config.api_url, "http://127.0.0.1:1234");
        assert_eq!(
            config.cover_url(Some(7), CoverSize::Small),
            "http://covers.test/b/id/7-S.jpg"
        );
    }
}
