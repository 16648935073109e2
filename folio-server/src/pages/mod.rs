//! Server-rendered pages
//!
//! The shell renders two views: the list/search page at `/` and the detail
//! page at `/book/:id`.

pub mod html;

pub use html::{book_href, page_href, render_details, render_home};
