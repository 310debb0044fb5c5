//! Catalog access
//!
//! The `CatalogApi` trait is the seam between the browser logic and the
//! remote character catalog. `CatalogClient` implements it over HTTP; tests
//! substitute scripted implementations.

mod client;

pub use client::{CatalogClient, DEFAULT_BASE_URL};

use crate::error::Result;
use crate::types::{Character, CharacterId, Episode, JsonValue};
use async_trait::async_trait;

/// Read access to the character catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// URL of the first roster page
    fn first_page_url(&self) -> String;

    /// Fetch one roster page as raw JSON (`{ info, results }`)
    async fn fetch_page(&self, url: &str) -> Result<JsonValue>;

    /// Fetch a single character by id
    async fn fetch_character(&self, id: CharacterId) -> Result<Character>;

    /// Fetch one episode by its resource URL
    async fn fetch_episode(&self, url: &str) -> Result<Episode>;
}

#[cfg(test)]
mod tests;
