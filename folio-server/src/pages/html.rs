//! HTML generation for the shell pages
//!
//! Uses quick-xml's writer so every text node and attribute is escaped.

use crate::state::ShellSettings;
use folio_core::{
    BookDetails, BookSummary, Catalog, CoverSize, DetailView, ListView, Loadable, SearchForm,
};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

type HtmlResult = Result<(), quick_xml::Error>;
type HtmlWriter = Writer<Cursor<Vec<u8>>>;

/// Application name shown in the head bar and page titles
const APP_NAME: &str = "Folio";

/// Stylesheet; contains no characters that need escaping
const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#f7f5f0;color:#222}\
header{display:flex;justify-content:space-between;padding:1rem 2rem;background:#2c2a26}\
header a{color:#f7f5f0;text-decoration:none;font-weight:600}\
main{max-width:72rem;margin:0 auto;padding:1.5rem}\
form.search{display:flex;gap:.5rem;flex-wrap:wrap;margin-bottom:1rem}\
ul.books{list-style:none;padding:0;display:grid;grid-template-columns:repeat(auto-fill,minmax(11rem,1fr));gap:1rem}\
li.book a{color:inherit;text-decoration:none}\
li.book img{width:100%;aspect-ratio:2/3;object-fit:cover;background:#e2ddd2}\
nav.pagination{display:flex;gap:.25rem;justify-content:center;margin:1.5rem 0}\
nav.pagination a{padding:.25rem .6rem;border:1px solid #ccc;color:inherit;text-decoration:none}\
nav.pagination a.active{background:#2c2a26;color:#f7f5f0}\
.error{color:#a01818}\
.splash{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;background:#2c2a26;color:#f7f5f0;font-size:2rem;animation:splash-out .4s ease forwards}\
@keyframes splash-out{to{opacity:0;visibility:hidden}}\
article.detail{display:flex;gap:2rem;flex-wrap:wrap}\
article.detail img{width:18rem;max-width:100%}";

/// Write an opening tag with attributes
fn write_start<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
) -> HtmlResult {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

fn write_end<W: Write>(writer: &mut Writer<W>, name: &str) -> HtmlResult {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write an element holding only text
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> HtmlResult {
    write_start(writer, name, attrs)?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    write_end(writer, name)
}

/// Write a void element such as `<img>` or `<input>`
fn write_void<W: Write>(writer: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> HtmlResult {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Link to a page of the list view, keeping the active filters
pub fn page_href(form: &SearchForm, page: usize) -> String {
    let mut params = Vec::new();
    let title = form.title.trim();
    if !title.is_empty() {
        params.push(format!("title={}", urlencoding::encode(title)));
    }
    let year = form.year.trim();
    if !year.is_empty() {
        params.push(format!("year={}", urlencoding::encode(year)));
    }
    if page > 1 {
        params.push(format!("page={}", page));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Link to the detail page of a book
pub fn book_href(book: &BookSummary) -> String {
    format!("/book/{}", urlencoding::encode(book.id()))
}

/// Wrap page content in the shell: head, splash overlay and head bar
fn render_shell(
    shell: &ShellSettings,
    title: &str,
    content: impl FnOnce(&mut HtmlWriter) -> HtmlResult,
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    write_start(&mut writer, "html", &[("lang", "en")])?;

    write_start(&mut writer, "head", &[])?;
    write_void(&mut writer, "meta", &[("charset", "utf-8")])?;
    write_void(
        &mut writer,
        "meta",
        &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
    )?;
    write_text_element(&mut writer, "title", &[], title)?;
    write_start(&mut writer, "style", &[])?;
    writer.write_event(Event::Text(BytesText::from_escaped(STYLE)))?;
    write_end(&mut writer, "style")?;
    write_end(&mut writer, "head")?;

    write_start(&mut writer, "body", &[])?;

    // Splash overlay, faded out by CSS after the configured delay
    let delay = format!("animation-delay:{}ms", shell.splash_ms);
    write_text_element(
        &mut writer,
        "div",
        &[("class", "splash"), ("style", delay.as_str()), ("aria-hidden", "true")],
        APP_NAME,
    )?;

    // Head bar
    write_start(&mut writer, "header", &[])?;
    write_text_element(&mut writer, "a", &[("href", "/"), ("class", "home")], APP_NAME)?;
    write_text_element(
        &mut writer,
        "a",
        &[
            ("href", shell.repository_url.as_str()),
            ("target", "_blank"),
            ("rel", "noopener"),
        ],
        "GitHub",
    )?;
    write_end(&mut writer, "header")?;

    write_start(&mut writer, "main", &[])?;
    content(&mut writer)?;
    write_end(&mut writer, "main")?;

    write_end(&mut writer, "body")?;
    write_end(&mut writer, "html")?;

    into_page(writer.into_inner().into_inner())
}

/// Turn rendered bytes into the page body
fn into_page(bytes: Vec<u8>) -> Result<String, quick_xml::Error> {
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

/// Render the list/search page
pub fn render_home(
    shell: &ShellSettings,
    view: &ListView,
    catalog: &dyn Catalog,
) -> Result<String, quick_xml::Error> {
    render_shell(shell, APP_NAME, |writer| {
        write_search_form(writer, view)?;

        if view.has_error() {
            write_text_element(
                writer,
                "p",
                &[("class", "error")],
                "Could not load books. Please try again.",
            )?;
        } else if view.books.is_empty() && view.validation.is_empty() {
            write_text_element(writer, "p", &[("class", "empty")], "No books found.")?;
        }

        if !view.books.is_empty() {
            let summary = format!("{} books", view.books.len());
            write_text_element(writer, "p", &[("class", "count")], &summary)?;

            write_start(writer, "ul", &[("class", "books")])?;
            for book in view.books.page_items() {
                write_book_card(writer, book, catalog)?;
            }
            write_end(writer, "ul")?;

            write_pagination(writer, view)?;
        }
        Ok(())
    })
}

fn write_search_form(writer: &mut HtmlWriter, view: &ListView) -> HtmlResult {
    write_start(
        writer,
        "form",
        &[("class", "search"), ("method", "get"), ("action", "/")],
    )?;
    write_void(
        writer,
        "input",
        &[
            ("type", "text"),
            ("name", "title"),
            ("placeholder", "Search by title"),
            ("minlength", "2"),
            ("value", view.form.title.as_str()),
        ],
    )?;
    write_void(
        writer,
        "input",
        &[
            ("type", "text"),
            ("name", "year"),
            ("placeholder", "Year"),
            ("inputmode", "numeric"),
            ("pattern", "[0-9]{4}"),
            ("maxlength", "4"),
            ("value", view.form.year.as_str()),
        ],
    )?;
    write_text_element(writer, "button", &[("type", "submit")], "Search")?;
    write_text_element(writer, "a", &[("href", "/?reset=1"), ("class", "reset")], "Reset")?;
    write_end(writer, "form")?;

    if !view.validation.is_empty() {
        write_start(writer, "ul", &[("class", "error validation")])?;
        for problem in &view.validation {
            write_text_element(writer, "li", &[], &problem.to_string())?;
        }
        write_end(writer, "ul")?;
    }
    Ok(())
}

fn write_book_card(
    writer: &mut HtmlWriter,
    book: &BookSummary,
    catalog: &dyn Catalog,
) -> HtmlResult {
    let href = book_href(book);
    let cover = catalog.cover_url(book.cover_id, CoverSize::Medium);

    write_start(writer, "li", &[("class", "book")])?;
    write_start(writer, "a", &[("href", href.as_str())])?;
    write_void(
        writer,
        "img",
        &[("src", cover.as_str()), ("alt", book.title.as_str()), ("loading", "lazy")],
    )?;
    write_text_element(writer, "h2", &[], &book.title)?;
    if let Some(subtitle) = &book.subtitle {
        write_text_element(writer, "p", &[("class", "subtitle")], subtitle)?;
    }
    if let Some(authors) = book.authors_display() {
        write_text_element(writer, "p", &[("class", "authors")], &authors)?;
    }
    if let Some(year) = book.first_publish_year {
        write_text_element(writer, "p", &[("class", "year")], &year.to_string())?;
    }
    if let Some(editions) = book.edition_count {
        let label = format!("{} editions", editions);
        write_text_element(writer, "p", &[("class", "editions")], &label)?;
    }
    write_end(writer, "a")?;
    write_end(writer, "li")
}

fn write_pagination(writer: &mut HtmlWriter, view: &ListView) -> HtmlResult {
    let pages = &view.books;
    if pages.total_pages() <= 1 {
        return Ok(());
    }

    write_start(writer, "nav", &[("class", "pagination")])?;
    if pages.has_previous() {
        let href = page_href(&view.form, pages.current_page() - 1);
        write_text_element(writer, "a", &[("href", href.as_str()), ("rel", "prev")], "Previous")?;
    }
    for page in pages.page_numbers() {
        let href = page_href(&view.form, page);
        let label = page.to_string();
        if page == pages.current_page() {
            write_text_element(
                writer,
                "a",
                &[("href", href.as_str()), ("class", "active"), ("aria-current", "page")],
                &label,
            )?;
        } else {
            write_text_element(writer, "a", &[("href", href.as_str())], &label)?;
        }
    }
    if pages.has_next() {
        let href = page_href(&view.form, pages.current_page() + 1);
        write_text_element(writer, "a", &[("href", href.as_str()), ("rel", "next")], "Next")?;
    }
    write_end(writer, "nav")
}

/// Render the detail page
pub fn render_details(
    shell: &ShellSettings,
    view: &DetailView,
) -> Result<String, quick_xml::Error> {
    let title = match view.state.value() {
        Some(details) => format!("{} - {}", details.title, APP_NAME),
        None => APP_NAME.to_string(),
    };

    render_shell(shell, &title, |writer| {
        write_text_element(writer, "a", &[("href", "/"), ("class", "back")], "Back")?;

        match &view.state {
            Loadable::Loaded(details) => write_details(writer, details),
            Loadable::Failed(_) => write_text_element(
                writer,
                "p",
                &[("class", "error")],
                "Could not load this book.",
            ),
            Loadable::Loading => {
                write_text_element(writer, "p", &[("class", "loading")], "Loading...")
            }
        }
    })
}

fn write_details(writer: &mut HtmlWriter, details: &BookDetails) -> HtmlResult {
    write_start(writer, "article", &[("class", "detail")])?;
    write_void(
        writer,
        "img",
        &[("src", details.cover_url.as_str()), ("alt", details.title.as_str())],
    )?;

    write_start(writer, "section", &[])?;
    write_text_element(writer, "h1", &[], &details.title)?;
    if let Some(subtitle) = &details.subtitle {
        write_text_element(writer, "h2", &[], subtitle)?;
    }
    if !details.authors.is_empty() {
        let by = format!("By {}", details.authors.join(", "));
        write_text_element(writer, "p", &[("class", "authors")], &by)?;
    }
    let published = format!("Published: {}", details.publication_date);
    write_text_element(writer, "p", &[("class", "date")], &published)?;
    write_text_element(writer, "p", &[("class", "description")], &details.description)?;

    write_start(writer, "dl", &[])?;
    if let Some(pages) = details.number_of_pages {
        write_text_element(writer, "dt", &[], "Pages")?;
        write_text_element(writer, "dd", &[], &pages.to_string())?;
    }
    if !details.isbn_13.is_empty() {
        write_text_element(writer, "dt", &[], "ISBN")?;
        write_text_element(writer, "dd", &[], &details.isbn_13.join(", "))?;
    }
    if !details.subjects.is_empty() {
        write_text_element(writer, "dt", &[], "Subjects")?;
        write_text_element(writer, "dd", &[], &details.subjects.join(", "))?;
    }
    write_end(writer, "dl")?;

    write_end(writer, "section")?;
    write_end(writer, "article")
}
