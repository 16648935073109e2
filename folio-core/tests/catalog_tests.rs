//! Integration tests for the catalog client against a mock Open Library API

use folio_core::{
    load_details, Catalog, CatalogClient, CatalogConfig, CatalogError, CoverSize, FolioError,
    ListView, SearchForm, ValidationError,
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

/// Create a client pointed at the mock server
fn client_for(server: &ServerGuard) -> CatalogClient {
    CatalogClient::new(CatalogConfig::default().with_api_url(server.url()))
}

fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

fn search_docs() -> serde_json::Value {
    json!({
        "numFound": 5,
        "docs": [
            {"key": "/works/OL1W", "title": "Exact", "first_publish_year": 1999, "cover_i": 11},
            {"key": "/works/OL2W", "title": "Year before", "first_publish_year": 1998},
            {"key": "/works/OL3W", "title": "Year after", "first_publish_year": 2000},
            {"key": "/works/OL4W", "title": "No year"},
            {"key": "/works/OL5W", "title": "Also exact", "first_publish_year": 1999}
        ]
    })
}

#[tokio::test]
async fn test_default_books_uses_subject_listing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/subjects/computer_science.json")
        .match_query(query(&[("limit", "50")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "computer_science",
                "works": [
                    {
                        "key": "/works/OL262758W",
                        "title": "Structure and Interpretation of Computer Programs",
                        "cover_id": 8231994,
                        "edition_count": 21,
                        "first_publish_year": 1985,
                        "authors": [{"key": "/authors/OL230A", "name": "Harold Abelson"}]
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let books = client_for(&server).default_books().await.unwrap();

    mock.assert_async().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id(), "OL262758W");
    assert_eq!(books[0].cover_id, Some(8231994));
    assert_eq!(books[0].author_name, vec!["Harold Abelson"]);
}

#[tokio::test]
async fn test_search_by_title_lowercases_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.json")
        .match_query(query(&[("title", "the rust book"), ("limit", "50")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "docs": [
                    {"key": "/works/OL9W", "title": "The Rust Book", "cover_i": 42, "author_name": ["Steve Klabnik"]}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let books = client_for(&server)
        .search_by_title("The Rust  Book")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].cover_id, Some(42));
    assert_eq!(books[0].author_name, vec!["Steve Klabnik"]);
}

#[tokio::test]
async fn test_search_by_year_keeps_exact_matches_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.json")
        .match_query(query(&[
            ("q", "book"),
            ("first_publish_year", "1999"),
            ("limit", "100"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_docs().to_string())
        .create_async()
        .await;

    let books = client_for(&server).search_by_year(1999).await.unwrap();

    mock.assert_async().await;
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b.first_publish_year == Some(1999)));
}

#[tokio::test]
async fn test_search_by_title_and_year_keeps_exact_matches_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.json")
        .match_query(query(&[
            ("q", "dune"),
            ("first_publish_year", "1999"),
            ("limit", "100"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_docs().to_string())
        .create_async()
        .await;

    let books = client_for(&server)
        .search_by_title_and_year("Dune", 1999)
        .await
        .unwrap();

    mock.assert_async().await;
    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Exact", "Also exact"]);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search.json")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let result = client_for(&server).search_by_title("rust").await;

    match result {
        Err(CatalogError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    // Nothing listens on port 9 of the loopback interface
    let client = CatalogClient::new(CatalogConfig::default().with_api_url("http://127.0.0.1:9"));

    let result = client.default_books().await;
    assert!(matches!(result, Err(CatalogError::Transport(_))));
}

#[tokio::test]
async fn test_work_and_author_lookup() {
    let mut server = Server::new_async().await;
    let work_mock = server
        .mock("GET", "/works/OL45883W.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"key": "/works/OL45883W", "title": "Fantastic Mr Fox"}).to_string())
        .create_async()
        .await;
    let author_mock = server
        .mock("GET", "/authors/OL34184A.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"key": "/authors/OL34184A", "name": "Roald Dahl"}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let work = client.work("/works/OL45883W").await.unwrap();
    let name = client.author_name("/authors/OL34184A").await.unwrap();

    work_mock.assert_async().await;
    author_mock.assert_async().await;
    assert_eq!(work.title, "Fantastic Mr Fox");
    assert_eq!(name, "Roald Dahl");
}

#[tokio::test]
async fn test_edition_date_failure_is_absorbed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/works/OL1W/editions.json")
        .match_query(query(&[("limit", "1")]))
        .with_status(404)
        .create_async()
        .await;

    let date = client_for(&server).first_edition_date("OL1W").await;
    assert_eq!(date, None);
}

#[tokio::test]
async fn test_details_fall_back_to_first_edition_date() {
    let mut server = Server::new_async().await;
    let _work = server
        .mock("GET", "/works/OL7W.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "key": "/works/OL7W",
                "title": "Compilers",
                "description": "The dragon book.",
                "covers": [123],
                "authors": [
                    {"author": {"key": "/authors/OL1A"}, "type": "/type/author_role"},
                    {"author": {"key": "/authors/OL2A"}, "type": {"key": "/type/author_role"}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _a1 = server
        .mock("GET", "/authors/OL1A.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"name": "Alfred V. Aho"}).to_string())
        .create_async()
        .await;
    let _a2 = server
        .mock("GET", "/authors/OL2A.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"name": "Jeffrey D. Ullman"}).to_string())
        .create_async()
        .await;
    let editions = server
        .mock("GET", "/works/OL7W/editions.json")
        .match_query(query(&[("limit", "1")]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"entries": [{"publish_date": "1986"}]}).to_string())
        .create_async()
        .await;

    let details = load_details(&client_for(&server), "/works/OL7W").await.unwrap();

    editions.assert_async().await;
    assert_eq!(details.id, "OL7W");
    assert_eq!(details.publication_date, "1986");
    assert_eq!(details.authors, vec!["Alfred V. Aho", "Jeffrey D. Ullman"]);
    assert_eq!(details.description, "The dragon book.");
    assert_eq!(
        details.cover_url,
        "https://covers.openlibrary.org/b/id/123-L.jpg"
    );
}

#[tokio::test]
async fn test_details_unknown_date_and_failed_authors() {
    let mut server = Server::new_async().await;
    let _work = server
        .mock("GET", "/works/OL8W.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "key": "/works/OL8W",
                "title": "Orphan",
                "authors": [{"author": {"key": "/authors/OL9A"}}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _author = server
        .mock("GET", "/authors/OL9A.json")
        .with_status(500)
        .create_async()
        .await;
    let _editions = server
        .mock("GET", "/works/OL8W/editions.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"entries": []}).to_string())
        .create_async()
        .await;

    let details = load_details(&client_for(&server), "OL8W").await.unwrap();

    assert_eq!(details.publication_date, "Unknown");
    assert!(details.authors.is_empty());
    assert_eq!(details.description, "No description available.");
    assert_eq!(details.cover_url, "/placeholder-book.png");
}

#[tokio::test]
async fn test_details_prefer_explicit_date() {
    let mut server = Server::new_async().await;
    let _work = server
        .mock("GET", "/works/OL10W.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "key": "/works/OL10W",
                "title": "Dated",
                "first_publish_date": "March 1996",
                "first_publish_year": 1996
            })
            .to_string(),
        )
        .create_async()
        .await;
    let editions = server
        .mock("GET", "/works/OL10W/editions.json")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let details = load_details(&client_for(&server), "OL10W").await.unwrap();

    editions.assert_async().await;
    assert_eq!(details.publication_date, "March 1996");
}

#[tokio::test]
async fn test_empty_form_submits_default_catalog() {
    let mut server = Server::new_async().await;
    let listing = server
        .mock("GET", "/subjects/computer_science.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"works": [{"key": "/works/OL1W", "title": "Default"}]}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let via_form = SearchForm::default().submit(&client).await.unwrap();
    let direct = client.default_books().await.unwrap();

    listing.assert_async().await;
    assert_eq!(via_form, direct);
}

#[tokio::test]
async fn test_invalid_form_issues_no_request() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search.json")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = SearchForm::new("R", "").submit(&client).await;

    search.assert_async().await;
    assert!(matches!(
        result,
        Err(FolioError::Validation(ValidationError::TitleTooShort { .. }))
    ));
}

#[tokio::test]
async fn test_list_view_records_failure() {
    let mut server = Server::new_async().await;
    let _search = server
        .mock("GET", "/search.json")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let mut view = ListView::new();
    view.submit(SearchForm::new("rust", ""), &client_for(&server))
        .await;

    assert!(view.has_error());
    assert!(!view.loading);
    assert!(view.books.is_empty());
}

#[test]
fn test_cover_url_through_client() {
    let client = CatalogClient::new(CatalogConfig::default());
    assert_eq!(
        client.cover_url(Some(12345), CoverSize::Large),
        "https://covers.openlibrary.org/b/id/12345-L.jpg"
    );
    assert_eq!(client.cover_url(None, CoverSize::Large), "/placeholder-book.png");
}
