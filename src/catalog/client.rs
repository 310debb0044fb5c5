//! HTTP implementation of the catalog API

use super::CatalogApi;
use crate::config::BrowserConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::{Character, CharacterId, Episode, JsonValue};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Public Rick & Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Catalog client backed by [`HttpClient`]
#[derive(Debug)]
pub struct CatalogClient {
    http: HttpClient,
    base: Url,
}

impl CatalogClient {
    /// Create a client for the catalog rooted at `base_url`
    pub fn new(base_url: &str, http_config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            base: parse_base(base_url)?,
        })
    }

    /// Create a client from browser configuration
    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        Self::new(&config.base_url, config.http.to_client_config())
    }

    /// Root URL every resource path is joined onto
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of a single character resource
    pub fn character_url(&self, id: CharacterId) -> Result<Url> {
        Ok(self.base.join(&format!("character/{id}"))?)
    }
}

/// Parse a base URL, forcing a trailing slash so joins append instead of replace
fn parse_base(base_url: &str) -> Result<Url> {
    let mut normalized = base_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(Url::parse(&normalized)?)
}

#[async_trait]
impl CatalogApi for CatalogClient {
    fn first_page_url(&self) -> String {
        // "character" is a fixed relative path, joining cannot fail on a valid base
        self.base
            .join("character")
            .map_or_else(|_| format!("{}character", self.base), String::from)
    }

    async fn fetch_page(&self, url: &str) -> Result<JsonValue> {
        debug!(url, "fetching roster page");
        self.http.get_json(url).await
    }

    async fn fetch_character(&self, id: CharacterId) -> Result<Character> {
        let url = self.character_url(id)?;
        debug!(id, "fetching character");
        self.http.get_json(url.as_str()).await
    }

    async fn fetch_episode(&self, url: &str) -> Result<Episode> {
        debug!(url, "fetching episode");
        self.http.get_json(url).await
    }
}
