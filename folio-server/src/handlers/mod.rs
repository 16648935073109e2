//! Request handlers

mod api;
mod pages;

pub use api::*;
pub use pages::*;

use axum::{
    http::header,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Serialize;

/// Placeholder cover served for books without one
static PLACEHOLDER_PNG: &[u8] = include_bytes!("../../assets/placeholder-book.png");

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Placeholder cover image
pub async fn placeholder_cover() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        PLACEHOLDER_PNG,
    )
}

/// Unknown paths go back to the list view
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}
