//! PokeAPI HTTP client with response caching
//!
//! All requests go through [`ApiClient::fetch_json`], which consults the
//! response cache before touching the network. A cache hit decodes the stored
//! body directly; a miss performs the request and stores the raw body on
//! success. Failed requests are never cached, so a retry after an error
//! always goes back to the network.

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cache::Cache;
use crate::data::{AreaDetails, LocationPage, Pokemon};

/// Default API root for the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching API data
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Failed to parse the JSON response body
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for fetching PokeAPI resources through the response cache
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl ApiClient {
    /// Creates a client for the given API root, sharing the given cache
    ///
    /// `base_url` is taken without its trailing slash so resource paths can
    /// be appended uniformly.
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            cache,
        }
    }

    /// Fetches a URL and decodes its JSON body, going through the cache
    ///
    /// On a cache hit the stored body is decoded without any network call.
    /// On a miss the response body is cached before decoding, so a decode
    /// failure still leaves the raw payload available for inspection; error
    /// responses are surfaced and never cached.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        if let Some(body) = self.cache.get(url) {
            debug!("cache hit for {}", url);
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!("fetching {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.put(url, body.to_vec());

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one page of the location-area listing
    ///
    /// Pass a cursor URL from a previous page's `next`/`previous` field, or
    /// `None` for the first page.
    pub async fn fetch_location_page(&self, url: Option<&str>) -> Result<LocationPage, ApiError> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => {
                let url = format!("{}/location-area/", self.base_url);
                self.fetch_json(&url).await
            }
        }
    }

    /// Fetches the encounter list for a named location area
    pub async fn fetch_area(&self, name: &str) -> Result<AreaDetails, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches full details for a named creature
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, Cache::new(Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_normalized() {
        let client = test_client("https://pokeapi.co/api/v2/");

        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
    }

    #[tokio::test]
    async fn test_cached_body_is_decoded_without_network() {
        // Point at an unroutable host so any network attempt fails loudly,
        // then pre-seed the cache for the URL the client would request.
        let client = test_client("http://127.0.0.1:1");
        let url = "http://127.0.0.1:1/location-area/test-area";
        client
            .cache
            .put(url, br#"{"pokemon_encounters": []}"#.to_vec());

        let area = client
            .fetch_area("test-area")
            .await
            .expect("cache hit should not require the network");

        assert!(area.pokemon_encounters.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_not_cached() {
        let client = test_client("http://127.0.0.1:1");

        let result = client.fetch_pokemon("pikachu").await;

        assert!(matches!(result, Err(ApiError::Request(_))));
        assert!(client.cache.get("http://127.0.0.1:1/pokemon/pikachu").is_none());
    }

    #[tokio::test]
    async fn test_corrupt_cached_body_surfaces_decode_error() {
        let client = test_client("http://127.0.0.1:1");
        let url = "http://127.0.0.1:1/pokemon/garbled";
        client.cache.put(url, b"not json".to_vec());

        let result = client.fetch_pokemon("garbled").await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
