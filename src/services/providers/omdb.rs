//! OMDb API provider
//!
//! Both operations are plain GETs against the same base URL:
//! 1. Title Search: `?apikey=..&s=<query>&type=movie&page=<n>`
//! 2. Details: `?apikey=..&i=<imdb id>&plot=full`
//!
//! OMDb reports most failures with a 200 and `{"Response": "False", "Error": ".."}`,
//! so the body is checked for that envelope before decoding the payload.
use crate::{
    error::{AppError, AppResult},
    models::{MovieDetail, OmdbDetailResponse, OmdbSearchResponse, OmdbStatus, SearchPage},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

const SEARCH_TYPE: &str = "movie";
const PLOT_LENGTH: &str = "full";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl OmdbProvider {
    /// Creates a new OMDb provider. A `None` or blank key is reported on first use.
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url,
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or(AppError::CredentialMissing)
    }

    /// Issues a GET and decodes the body, classifying OMDb error envelopes
    async fn fetch<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // A rejected key comes back as 401 with the usual error envelope
            if let Ok(envelope) = serde_json::from_str::<OmdbStatus>(&body) {
                if envelope.is_failure() {
                    return Err(classify_error(envelope.error));
                }
            }
            return Err(AppError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: OmdbStatus = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to decode OMDb response");
            AppError::from(e)
        })?;

        if envelope.is_failure() {
            return Err(classify_error(envelope.error));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to deserialize OMDb payload");
            AppError::from(e)
        })
    }
}

/// Maps an OMDb `Error` string onto a structured error
fn classify_error(message: Option<String>) -> AppError {
    let message = message.unwrap_or_else(|| "Unknown API error".to_string());
    let trimmed = message.trim();

    match trimmed {
        m if m.starts_with("No API key provided") => AppError::CredentialMissing,
        m if m.starts_with("Invalid API key") => AppError::CredentialInvalid,
        "Movie not found!" | "Series not found!" | "Incorrect IMDb ID." => {
            AppError::NotFound(trimmed.to_string())
        }
        _ => AppError::Provider(trimmed.to_string()),
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<SearchPage> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let api_key = self.api_key()?;
        let page_param = page.max(1).to_string();

        let response: OmdbSearchResponse = self
            .fetch(&[
                ("apikey", api_key),
                ("s", query),
                ("type", SEARCH_TYPE),
                ("page", page_param.as_str()),
            ])
            .await?;

        let page = SearchPage::from(response);

        tracing::info!(
            query = %query,
            results = page.items.len(),
            total = page.total_results,
            provider = self.name(),
            "Title search completed"
        );

        Ok(page)
    }

    async fn movie_detail(&self, id: &str) -> AppResult<MovieDetail> {
        if id.trim().is_empty() {
            return Err(AppError::InvalidInput("Movie ID cannot be empty".to_string()));
        }

        let api_key = self.api_key()?;

        let response: OmdbDetailResponse = self
            .fetch(&[("apikey", api_key), ("i", id), ("plot", PLOT_LENGTH)])
            .await?;

        tracing::info!(id = %id, provider = self.name(), "Movie details fetched");

        Ok(MovieDetail::from(response))
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
