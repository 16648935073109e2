//! Book summary - one entry of a listing or search result

use serde::{Deserialize, Serialize};

/// Key prefix used by upstream for work records
pub const WORK_PREFIX: &str = "/works/";

/// Title shown for records that arrive without one
pub const UNTITLED: &str = "Untitled";

/// A book as it appears in a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookSummary {
    /// Opaque work key, e.g. `/works/OL17365W`
    pub key: String,

    /// Book title
    pub title: String,

    /// Optional subtitle
    pub subtitle: Option<String>,

    /// Number of known editions
    pub edition_count: Option<u32>,

    /// Numeric cover identifier
    pub cover_id: Option<i64>,

    /// Year of first publication
    pub first_publish_year: Option<i32>,

    /// Author display names
    #[serde(default)]
    pub author_name: Vec<String>,

    /// Free-text description
    pub description: Option<Description>,
}

impl BookSummary {
    /// Create a summary with only key and title set
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            subtitle: None,
            edition_count: None,
            cover_id: None,
            first_publish_year: None,
            author_name: Vec::new(),
            description: None,
        }
    }

    /// Set the first-publish year
    pub fn with_year(mut self, year: i32) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    /// Add an author name
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author_name.push(name.into());
        self
    }

    /// Set the cover identifier
    pub fn with_cover(mut self, cover_id: i64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// Bare work identifier (`OL17365W`), usable in detail routes
    pub fn id(&self) -> &str {
        strip_prefix(&self.key, WORK_PREFIX)
    }

    /// Authors joined for display
    pub fn authors_display(&self) -> Option<String> {
        if self.author_name.is_empty() {
            None
        } else {
            Some(self.author_name.join(", "))
        }
    }
}

/// Description text; upstream sends either a plain string or `{ "value": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Typed {
        #[serde(default)]
        value: Option<String>,
    },
}

impl Description {
    /// The description text, if non-empty
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Description::Text(text) => text.as_str(),
            Description::Typed { value } => value.as_deref().unwrap_or_default(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

/// Strip an upstream key prefix such as `/works/` or `/authors/`
pub fn strip_prefix<'a>(key: &'a str, prefix: &str) -> &'a str {
    key.strip_prefix(prefix).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_strips_work_prefix() {
        let book = BookSummary::new("/works/OL17365W", "SICP");
        assert_eq!(book.id(), "OL17365W");

        let bare = BookSummary::new("OL1W", "Bare");
        assert_eq!(bare.id(), "OL1W");
    }

    #[test]
    fn test_description_representations() {
        let plain: Description = serde_json::from_str(r#""A classic.""#).unwrap();
        assert_eq!(plain.text(), Some("A classic."));

        let typed: Description =
            serde_json::from_str(r#"{"type": "/type/text", "value": "Typed text"}"#).unwrap();
        assert_eq!(typed.text(), Some("Typed text"));

        let empty: Description = serde_json::from_str(r#"{"type": "/type/text"}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_authors_display() {
        let book = BookSummary::new("/works/OL1W", "Book")
            .with_author("Harold Abelson")
            .with_author("Gerald Jay Sussman");
        assert_eq!(
            book.authors_display().as_deref(),
            Some("Harold Abelson, Gerald Jay Sussman")
        );
        assert_eq!(BookSummary::new("k", "t").authors_display(), None);
    }
}
