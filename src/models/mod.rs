use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What kind of entry the provider returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
    Episode,
    Game,
    #[serde(other)]
    Other,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
            MediaKind::Episode => "episode",
            MediaKind::Game => "game",
            MediaKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// One entry of a search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// IMDb ID (e.g., "tt0111161")
    pub id: String,
    pub title: String,
    /// Release year as reported, may be a range for series ("2008–2013")
    pub year: String,
    pub kind: MediaKind,
    pub poster_url: Option<String>,
}

/// First page of a title search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    /// Total matches across all pages, as reported by the provider
    pub total_results: u32,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_results: 0,
        }
    }
}

/// Full record for a single title, fetched on selection
///
/// Descriptive fields are `None` when the provider reports them as not applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub kind: MediaKind,
    pub poster_url: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
}

impl MovieDetail {
    /// Rating with vote count, e.g. `⭐ 9.3 / 10 (2,900,000 votes)`
    pub fn rating_line(&self) -> Option<String> {
        let rating = self.imdb_rating.as_deref()?;
        Some(match self.imdb_votes.as_deref() {
            Some(votes) => format!("⭐ {} / 10 ({} votes)", rating, votes),
            None => format!("⭐ {} / 10", rating),
        })
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Value OMDb uses for "not applicable"
const NOT_APPLICABLE: &str = "N/A";

/// Drops OMDb's "N/A" placeholders and blank strings
fn applicable(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_APPLICABLE
    })
}

/// Response status and error shared by every OMDb payload
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbStatus {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbStatus {
    pub fn is_failure(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}

/// Response from `?s=` search
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
}

impl From<OmdbSearchResponse> for SearchPage {
    fn from(response: OmdbSearchResponse) -> Self {
        let items: Vec<MovieSummary> = response.search.into_iter().map(MovieSummary::from).collect();
        let total_results = response
            .total_results
            .and_then(|total| total.trim().parse::<u32>().ok())
            .unwrap_or(items.len() as u32);

        SearchPage {
            items,
            total_results,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: MediaKind,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl From<OmdbSearchItem> for MovieSummary {
    fn from(item: OmdbSearchItem) -> Self {
        MovieSummary {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            kind: item.media_type,
            poster_url: applicable(item.poster),
        }
    }
}

/// Response from `?i=...&plot=full`
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default = "default_kind")]
    pub media_type: MediaKind,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: Option<String>,
}

fn default_kind() -> MediaKind {
    MediaKind::Movie
}

impl From<OmdbDetailResponse> for MovieDetail {
    fn from(detail: OmdbDetailResponse) -> Self {
        // OMDb reports titles without awards as "N/A Nominations"
        let awards = applicable(detail.awards).filter(|a| a != "N/A Nominations");

        MovieDetail {
            id: detail.imdb_id,
            title: detail.title,
            year: applicable(detail.year),
            kind: detail.media_type,
            poster_url: applicable(detail.poster),
            rated: applicable(detail.rated),
            runtime: applicable(detail.runtime),
            genre: applicable(detail.genre),
            director: applicable(detail.director),
            writer: applicable(detail.writer),
            actors: applicable(detail.actors),
            plot: applicable(detail.plot),
            language: applicable(detail.language),
            country: applicable(detail.country),
            awards,
            imdb_rating: applicable(detail.imdb_rating),
            imdb_votes: applicable(detail.imdb_votes),
        }
    }
}
