//! Core record types shared by the catalog client and the views

mod book;
mod cover;
mod work;

pub use book::{strip_prefix, BookSummary, Description, UNTITLED, WORK_PREFIX};
pub use cover::CoverSize;
pub use work::{Author, AuthorRole, KeyRef, WorkDetail, AUTHOR_PREFIX};
