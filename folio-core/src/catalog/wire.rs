//! Upstream response shapes and their normalization into [`BookSummary`]

use crate::types::{BookSummary, Description, UNTITLED};
use serde::Deserialize;

/// Listing payload; subject listings fill `works`, searches fill `docs`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingResponse {
    #[serde(default)]
    pub works: Vec<RawBook>,

    #[serde(default)]
    pub docs: Vec<RawBook>,
}

impl ListingResponse {
    /// Normalized records from whichever array the payload carries
    pub fn into_books(self) -> Vec<BookSummary> {
        let raw = if self.works.is_empty() {
            self.docs
        } else {
            self.works
        };
        raw.into_iter().map(BookSummary::from).collect()
    }
}

/// One listing record before normalization
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBook {
    pub key: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub edition_count: Option<u32>,
    pub cover_id: Option<i64>,
    pub cover_i: Option<i64>,
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub author_name: Vec<String>,
    /// Subject listings embed `{ key, name }` author objects instead of `author_name`
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
    pub description: Option<Description>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAuthor {
    pub name: Option<String>,
}

impl From<RawBook> for BookSummary {
    fn from(raw: RawBook) -> Self {
        let author_name = if raw.author_name.is_empty() {
            raw.authors.into_iter().filter_map(|a| a.name).collect()
        } else {
            raw.author_name
        };

        BookSummary {
            key: raw.key.unwrap_or_default(),
            title: raw
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            subtitle: raw.subtitle.filter(|s| !s.is_empty()),
            edition_count: raw.edition_count,
            cover_id: raw.cover_id.filter(|id| *id > 0).or(raw.cover_i),
            first_publish_year: raw.first_publish_year,
            author_name,
            description: raw.description.filter(|d| d.text().is_some()),
        }
    }
}

/// Payload of `/works/<id>/editions.json`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EditionsResponse {
    #[serde(default)]
    pub entries: Vec<EditionEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EditionEntry {
    pub publish_date: Option<String>,
}

impl EditionsResponse {
    /// Publish date of the first listed edition
    pub fn first_publish_date(self) -> Option<String> {
        self.entries
            .into_iter()
            .next()
            .and_then(|entry| entry.publish_date)
            .filter(|date| !date.is_empty())
    }
}
