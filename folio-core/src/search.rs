//! Search form: validation and retrieval dispatch
//!
//! The form holds raw user input. [`SearchForm::query`] validates it and picks
//! one of four retrieval paths depending on which filters are present.

use crate::catalog::{Catalog, CatalogResult};
use crate::error::{FolioError, ValidationError};
use crate::types::BookSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted title length, in characters
pub const MIN_TITLE_LEN: usize = 2;

/// Raw search input; empty or whitespace-only fields count as absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub year: String,
}

impl SearchForm {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
        }
    }

    fn title_value(&self) -> Option<&str> {
        Some(self.title.trim()).filter(|t| !t.is_empty())
    }

    fn year_value(&self) -> Option<&str> {
        Some(self.year.trim()).filter(|y| !y.is_empty())
    }

    /// True when neither filter is filled in
    pub fn is_empty(&self) -> bool {
        self.title_value().is_none() && self.year_value().is_none()
    }

    fn validate_title(&self) -> Result<Option<&str>, ValidationError> {
        match self.title_value() {
            Some(title) if title.chars().count() < MIN_TITLE_LEN => {
                Err(ValidationError::TitleTooShort { min: MIN_TITLE_LEN })
            }
            other => Ok(other),
        }
    }

    fn validate_year(&self) -> Result<Option<i32>, ValidationError> {
        let Some(year) = self.year_value() else {
            return Ok(None);
        };
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidYear(year.to_string()));
        }
        year.parse()
            .map(Some)
            .map_err(|_| ValidationError::InvalidYear(year.to_string()))
    }

    /// Every validation problem with the current input
    pub fn errors(&self) -> Vec<ValidationError> {
        [self.validate_title().err(), self.validate_year().err()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Validate the input and choose the retrieval path
    pub fn query(&self) -> Result<SearchQuery, ValidationError> {
        let title = self.validate_title()?;
        let year = self.validate_year()?;

        Ok(match (title, year) {
            (None, None) => SearchQuery::Default,
            (Some(title), None) => SearchQuery::Title(title.to_string()),
            (None, Some(year)) => SearchQuery::Year(year),
            (Some(title), Some(year)) => SearchQuery::TitleAndYear {
                title: title.to_string(),
                year,
            },
        })
    }

    /// Validate and run the search; an invalid form issues no request
    pub async fn submit(&self, catalog: &dyn Catalog) -> crate::Result<Vec<BookSummary>> {
        let query = self.query()?;
        query.run(catalog).await.map_err(FolioError::from)
    }

    /// Clear both fields
    pub fn reset(&mut self) {
        self.title.clear();
        self.year.clear();
    }

    /// Clear both fields and reload the default catalog
    pub async fn reset_and_reload(
        &mut self,
        catalog: &dyn Catalog,
    ) -> CatalogResult<Vec<BookSummary>> {
        self.reset();
        SearchQuery::Default.run(catalog).await
    }
}

/// A validated search, one variant per retrieval path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Default,
    Title(String),
    Year(i32),
    TitleAndYear { title: String, year: i32 },
}

impl SearchQuery {
    /// Execute against a catalog
    pub async fn run(&self, catalog: &dyn Catalog) -> CatalogResult<Vec<BookSummary>> {
        match self {
            SearchQuery::Default => catalog.default_books().await,
            SearchQuery::Title(title) => catalog.search_by_title(title).await,
            SearchQuery::Year(year) => catalog.search_by_year(*year).await,
            SearchQuery::TitleAndYear { title, year } => {
                catalog.search_by_title_and_year(title, *year).await
            }
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Default => write!(f, "default catalog"),
            SearchQuery::Title(title) => write!(f, "title \"{}\"", title),
            SearchQuery::Year(year) => write!(f, "year {}", year),
            SearchQuery::TitleAndYear { title, year } => {
                write!(f, "title \"{}\" in {}", title, year)
            }
        }
    }
}
