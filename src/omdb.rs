use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::models::Movie;

pub const OMDB_BASE: &str = "https://www.omdbapi.com/";

/// Everything that can go wrong during a single title lookup. Closed set;
/// callers render these with `to_string()` and nothing else propagates.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid URL")]
    InvalidRequest,
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid server response")]
    InvalidResponse,
    /// `body` carries the raw response text so the caller can log it when
    /// diagnosing a shape mismatch; it is not part of the display message.
    #[error("failed to parse data: {source}")]
    Decoding {
        source: serde_json::Error,
        body: String,
    },
    #[error("API error: {0}")]
    Api(String),
}

#[async_trait]
pub trait OmdbApi: Send + Sync {
    async fn fetch_movie(&self, title: &str) -> Result<Movie, LookupError>;
}

/// Stateless OMDb client: fixed key and base endpoint, one GET per lookup,
/// no retries. Errors are returned, never logged here.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OMDB_API_KEY")
            .map_err(|_| anyhow::anyhow!("OMDB_API_KEY not set"))?;
        let base_url = std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| OMDB_BASE.to_string());
        Ok(Self::new(api_key, base_url))
    }

    fn lookup_url(&self, title: &str) -> Result<Url, LookupError> {
        let raw = format!(
            "{}?apikey={}&t={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(title)
        );
        Url::parse(&raw).map_err(|_| LookupError::InvalidRequest)
    }
}

#[async_trait]
impl OmdbApi for OmdbClient {
    async fn fetch_movie(&self, title: &str) -> Result<Movie, LookupError> {
        let url = self.lookup_url(title)?;
        debug!(%url, "omdb lookup");

        let res = self.client.get(url).send().await?;
        if res.status() != StatusCode::OK {
            return Err(LookupError::InvalidResponse);
        }
        let body = res.text().await?;

        let movie: Movie = serde_json::from_str(&body)
            .map_err(|source| LookupError::Decoding { source, body })?;

        if movie.is_success() {
            Ok(movie)
        } else {
            let message = movie
                .error
                .unwrap_or_else(|| "movie not found or other API error".to_string());
            Err(LookupError::Api(message))
        }
    }
}
