//! Movie metadata provider abstraction
//!
//! The search controller only talks to the provider through this trait, so the
//! concrete HTTP client can be swapped for a mock in tests.
use crate::{
    error::AppResult,
    models::{MovieDetail, SearchPage},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for movie metadata providers
///
/// Errors come back already classified (`AppError::kind`), so callers never
/// inspect provider message strings.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search titles by name
    ///
    /// Only movies are searched; `page` is 1-based.
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<SearchPage>;

    /// Fetch the full record for one title by IMDb ID
    async fn movie_detail(&self, id: &str) -> AppResult<MovieDetail>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
