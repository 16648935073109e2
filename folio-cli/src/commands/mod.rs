//! CLI command implementations

mod cover;
mod list;
mod search;
mod show;

pub use cover::cover;
pub use list::list;
pub use search::search;
pub use show::show;

use anyhow::{bail, Result};
use folio_core::{Catalog, CoverSize, ListView};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

/// One page of a listing, as printed with `--json`
#[derive(Serialize)]
struct ListingOutput<'a> {
    query: String,
    total: usize,
    page: usize,
    total_pages: usize,
    page_numbers: Vec<usize>,
    books: &'a [folio_core::BookSummary],
}

/// Spinner shown on stderr while a request is in flight
fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Print the requested page of a loaded list view
fn print_listing(
    view: &mut ListView,
    catalog: &dyn Catalog,
    query: String,
    page: usize,
    json: bool,
) -> Result<()> {
    if let Some(error) = &view.error {
        bail!("Could not load books: {}", error);
    }

    if page != 1 && !view.go_to_page(page) {
        eprintln!(
            "Page {} is out of range (1-{}), showing page 1",
            page,
            view.books.total_pages().max(1)
        );
    }

    let books = &view.books;
    if json {
        let output = ListingOutput {
            query,
            total: books.len(),
            page: books.current_page(),
            total_pages: books.total_pages(),
            page_numbers: books.page_numbers(),
            books: books.page_items(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books found ({})", query);
        return Ok(());
    }

    println!(
        "{} books ({}), page {} of {}",
        books.len(),
        query,
        books.current_page(),
        books.total_pages()
    );
    println!();

    let offset = (books.current_page() - 1) * books.page_size();
    for (i, book) in books.page_items().iter().enumerate() {
        let year = book
            .first_publish_year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        println!("{:>4}. {}{}", offset + i + 1, book.title, year);
        if let Some(authors) = book.authors_display() {
            println!("      by {}", authors);
        }
        println!("      id: {}", book.id());
        println!(
            "      cover: {}",
            catalog.cover_url(book.cover_id, CoverSize::Medium)
        );
    }

    let pages: Vec<String> = books
        .page_numbers()
        .iter()
        .map(|n| {
            if *n == books.current_page() {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    if pages.len() > 1 {
        println!();
        println!("Pages: {}", pages.join(" "));
    }

    Ok(())
}
