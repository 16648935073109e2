//! Routes

use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when `FOLIO_CORS_ORIGINS` is unset
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:4200",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:4200",
];

/// Build the CORS layer
/// FOLIO_CORS_ORIGINS can be a comma-separated list of origins, or "*" for any
fn cors_layer() -> CorsLayer {
    let origins = match std::env::var("FOLIO_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ),
        None => AllowOrigin::list(
            DEV_ORIGINS
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/books", get(handlers::list_books))
        .route("/books/:id", get(handlers::get_book));

    Router::new()
        // Shell views
        .route("/", get(handlers::home_page))
        .route("/book/:id", get(handlers::book_page))
        .route("/placeholder-book.png", get(handlers::placeholder_cover))
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .fallback(handlers::redirect_home)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
