//! HTML page handlers

use crate::pages;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use folio_core::{DetailView, ListView, SearchForm};
use serde::Deserialize;

/// Query parameters of the list/search page
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub year: String,

    /// Page number (1-indexed); out-of-range or unparsable values leave the
    /// view on page 1
    pub page: Option<String>,

    /// Present when the reset button was used
    pub reset: Option<String>,
}

/// Render a page or fail with 500 if markup generation breaks
fn html_or_500(page: Result<String, quick_xml::Error>) -> Result<Html<String>, StatusCode> {
    page.map(Html).map_err(|e| {
        tracing::error!("Failed to render page: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// List/search view
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, StatusCode> {
    let mut view = ListView::new();

    if query.reset.is_some() {
        view.reset(state.catalog.as_ref()).await;
    } else {
        let form = SearchForm::new(query.title, query.year);
        view.submit(form, state.catalog.as_ref()).await;
    }

    if let Some(page) = query.page.as_deref() {
        if !page.parse().is_ok_and(|n| view.go_to_page(n)) {
            tracing::debug!(page, "Ignoring out-of-range page");
        }
    }

    html_or_500(pages::render_home(&state.shell, &view, state.catalog.as_ref()))
}

/// Detail view
pub async fn book_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let view = DetailView::load(state.catalog.as_ref(), &id).await;
    html_or_500(pages::render_details(&state.shell, &view))
}
