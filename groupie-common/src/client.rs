//! Remote data client for the artist API
//!
//! One primitive, [`ApiClient::fetch_json`], does a single GET, buffers the
//! whole body and decodes it into the requested shape. The typed wrappers only
//! pin the target type. No retries, no custom headers, no streaming.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::models::{Artist, DateSet, LocationSet, RelationMap};

/// Default artist list endpoint
pub const DEFAULT_ARTISTS_URL: &str = "https://groupietrackers.herokuapp.com/api/artists";

/// HTTP client for the artist API
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
}

impl ApiClient {
    /// Create new API client with the HTTP client's default timeouts
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }

    /// GET `url` and decode the JSON body as `T`
    ///
    /// # Errors
    /// - [`FetchError::Network`] if the request or body read fails
    /// - [`FetchError::Decode`] if the body is not JSON of shape `T`
    ///
    /// The HTTP status is not checked on its own: a non-2xx response whose body
    /// still decodes as `T` is accepted.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, FetchError> {
        debug!(url = %url, "Fetching");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();

        let bytes = response.bytes().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

        debug!(url = %url, status, bytes = bytes.len(), "Fetched");

        serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            status,
            source,
        })
    }

    /// Fetch the full artist list
    pub async fn fetch_artists(&self, url: &str) -> std::result::Result<Vec<Artist>, FetchError> {
        self.fetch_json(url).await
    }

    /// Fetch one artist's locations
    pub async fn fetch_locations(&self, url: &str) -> std::result::Result<LocationSet, FetchError> {
        self.fetch_json(url).await
    }

    /// Fetch one artist's concert dates
    pub async fn fetch_dates(&self, url: &str) -> std::result::Result<DateSet, FetchError> {
        self.fetch_json(url).await
    }

    /// Fetch one artist's location -> dates relation
    pub async fn fetch_relations(&self, url: &str) -> std::result::Result<RelationMap, FetchError> {
        self.fetch_json(url).await
    }
}
