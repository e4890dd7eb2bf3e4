use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

/// Application configuration loaded from `MOVIEFINDER_*` environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Quiet period before a typed query is sent, in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Shortest trimmed query that triggers a search
    #[serde(default = "default_min_search_length")]
    pub min_search_length: usize,

    /// Where to write the final HTML page on exit
    #[serde(default)]
    pub html_snapshot: Option<PathBuf>,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_search_delay_ms() -> u64 {
    500
}

fn default_min_search_length() -> usize {
    2
}

/// Settings the search controller needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(default_search_delay_ms()),
            min_query_len: default_min_search_length(),
        }
    }
}

impl Config {
    const ENV_PREFIX: &'static str = "MOVIEFINDER_";

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(Self::ENV_PREFIX)
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit key/value pairs (keys carry the prefix)
    pub fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::ENV_PREFIX)
            .from_iter::<_, Config>(pairs)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The API key, if one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.omdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn search(&self) -> SearchConfig {
        SearchConfig {
            debounce: Duration::from_millis(self.search_delay_ms),
            min_query_len: self.min_search_length,
        }
    }
}
