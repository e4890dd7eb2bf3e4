use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use moviefinder::{AppError, ErrorKind, MovieProvider, OmdbProvider};

const GOOD_KEY: &str = "test_key";

/// Minimal stand-in for the OMDb endpoint
async fn fake_omdb(
    State(hits): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    hits.fetch_add(1, Ordering::SeqCst);

    match params.get("apikey").map(String::as_str) {
        None => {
            return (
                StatusCode::OK,
                Json(json!({"Response": "False", "Error": "No API key provided."})),
            )
        }
        Some(GOOD_KEY) => {}
        Some(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"Response": "False", "Error": "Invalid API key!"})),
            )
        }
    }

    if let Some(query) = params.get("s") {
        if params.get("type").map(String::as_str) != Some("movie")
            || params.get("page").map(String::as_str) != Some("1")
        {
            return (StatusCode::BAD_REQUEST, Json(json!({"unexpected": params})));
        }

        return match query.as_str() {
            "bat" => (
                StatusCode::OK,
                Json(json!({
                    "Search": [
                        {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://img/bb.jpg"},
                        {"Title": "The Batman", "Year": "2022", "imdbID": "tt1877830", "Type": "movie", "Poster": "N/A"},
                        {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Type": "movie", "Poster": "https://img/b.jpg"}
                    ],
                    "totalResults": "3",
                    "Response": "True"
                })),
            ),
            "zzzznomatch" => (
                StatusCode::OK,
                Json(json!({"Response": "False", "Error": "Movie not found!"})),
            ),
            "a" => (
                StatusCode::OK,
                Json(json!({"Response": "False", "Error": "Too many results."})),
            ),
            "boom" => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "upstream exploded"})),
            ),
            _ => (StatusCode::OK, Json(json!({"garbage": true}))),
        };
    }

    match (params.get("i").map(String::as_str), params.get("plot").map(String::as_str)) {
        (Some("tt0111161"), Some("full")) => (
            StatusCode::OK,
            Json(json!({
                "Title": "The Shawshank Redemption",
                "Year": "1994",
                "Rated": "R",
                "Runtime": "142 min",
                "Genre": "Drama",
                "Director": "Frank Darabont",
                "Writer": "Stephen King, Frank Darabont",
                "Actors": "Tim Robbins, Morgan Freeman, Bob Gunton",
                "Plot": "N/A",
                "Language": "English",
                "Country": "United States",
                "Awards": "Nominated for 7 Oscars",
                "Poster": "N/A",
                "imdbRating": "9.3",
                "imdbVotes": "2,900,000",
                "imdbID": "tt0111161",
                "Type": "movie",
                "Response": "True"
            })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({"Response": "False", "Error": "Incorrect IMDb ID."})),
        ),
    }
}

/// Starts the fake endpoint on an ephemeral port, returning its URL and hit counter
async fn start_fake_omdb() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/", get(fake_omdb))
        .with_state(Arc::clone(&hits));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/", addr), hits)
}

async fn provider_with_key(key: Option<&str>) -> (OmdbProvider, Arc<AtomicUsize>) {
    let (url, hits) = start_fake_omdb().await;
    (OmdbProvider::new(key.map(String::from), url), hits)
}

#[tokio::test]
async fn test_search_returns_summaries_and_total() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let page = provider.search_movies("bat", 1).await.unwrap();

    assert_eq!(page.total_results, 3);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].title, "Batman Begins");
    assert_eq!(page.items[1].id, "tt1877830");
    assert_eq!(page.items[1].poster_url, None);
}

#[tokio::test]
async fn test_not_found_is_classified() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let error = provider.search_movies("zzzznomatch", 1).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unknown_provider_error_passes_through() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let error = provider.search_movies("a", 1).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Provider);
    assert_eq!(error.user_message(), "Too many results.");
}

#[tokio::test]
async fn test_rejected_key_with_401_is_credential_invalid() {
    let (provider, _) = provider_with_key(Some("wrong")).await;

    let error = provider.search_movies("bat", 1).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CredentialInvalid);
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let error = provider.search_movies("boom", 1).await.unwrap_err();
    assert!(matches!(error, AppError::UnexpectedStatus { status: 500, .. }));
    assert_eq!(error.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_malformed_body_is_provider_failure() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let error = provider.search_movies("whatever", 1).await.unwrap_err();
    assert!(matches!(error, AppError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_missing_key_never_reaches_network() {
    let (provider, hits) = provider_with_key(None).await;

    let error = provider.search_movies("bat", 1).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CredentialMissing);

    let error = provider.movie_detail("tt0111161").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CredentialMissing);

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_detail_omits_not_applicable_fields() {
    let (provider, hits) = provider_with_key(Some(GOOD_KEY)).await;

    let detail = provider.movie_detail("tt0111161").await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(detail.title, "The Shawshank Redemption");
    assert_eq!(
        detail.rating_line().as_deref(),
        Some("⭐ 9.3 / 10 (2,900,000 votes)")
    );
    assert_eq!(detail.runtime.as_deref(), Some("142 min"));
    assert_eq!(detail.genre.as_deref(), Some("Drama"));
    assert_eq!(detail.director.as_deref(), Some("Frank Darabont"));
    assert_eq!(detail.plot, None);
    assert_eq!(detail.poster_url, None);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (provider, _) = provider_with_key(Some(GOOD_KEY)).await;

    let error = provider.movie_detail("tt0000000").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.user_message(), "Movie not found");
}
