//! Work detail and author records

use super::Description;
use serde::{Deserialize, Serialize};

/// Key prefix used by upstream for author records
pub const AUTHOR_PREFIX: &str = "/authors/";

/// Full metadata for one work, as returned by `/works/<id>.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkDetail {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub title: String,

    pub subtitle: Option<String>,

    /// Free-form first publication date, e.g. `"March 1996"`
    pub first_publish_date: Option<String>,

    pub first_publish_year: Option<i32>,

    pub description: Option<Description>,

    /// Cover identifiers, preferred first
    #[serde(default)]
    pub covers: Vec<i64>,

    /// References to separate author records
    #[serde(default)]
    pub authors: Vec<AuthorRole>,

    pub number_of_pages: Option<u32>,

    #[serde(default)]
    pub isbn_13: Vec<String>,

    /// Subject tags
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl WorkDetail {
    /// Author keys referenced by this work, in order
    pub fn author_keys(&self) -> Vec<&str> {
        self.authors
            .iter()
            .filter_map(|role| role.author.as_ref())
            .map(|author| author.key.as_str())
            .filter(|key| !key.is_empty())
            .collect()
    }

    /// First cover identifier, if any
    pub fn primary_cover(&self) -> Option<i64> {
        self.covers.first().copied()
    }
}

/// An author entry on a work; only the author reference is read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorRole {
    pub author: Option<KeyRef>,
}

impl AuthorRole {
    pub fn new(author_key: impl Into<String>) -> Self {
        Self {
            author: Some(KeyRef {
                key: author_key.into(),
            }),
        }
    }
}

/// `{ "key": "..." }` reference to another record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyRef {
    pub key: String,
}

/// Author record from `/authors/<id>.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub name: String,
}
