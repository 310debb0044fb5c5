//! In-memory catalog used by unit tests

use crate::catalog::CatalogApi;
use crate::error::{Error, Result};
use crate::types::{Character, CharacterId, Episode, JsonValue};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

pub const FIRST_PAGE: &str = "mem://catalog/character";

/// Canned response for one URL
#[derive(Debug, Clone)]
enum Reply {
    Json(JsonValue),
    Status(u16),
}

/// A catalog that answers from a fixed table and records every request
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a character page at `url`, pointing at `next`
    pub fn page(mut self, url: &str, records: &[Character], next: Option<&str>) -> Self {
        self.replies.insert(
            url.to_string(),
            Reply::Json(json!({
                "info": {"count": records.len(), "next": next, "prev": null},
                "results": records,
            })),
        );
        self
    }

    /// Serve an arbitrary JSON body at `url`
    pub fn raw(mut self, url: &str, body: JsonValue) -> Self {
        self.replies.insert(url.to_string(), Reply::Json(body));
        self
    }

    /// Answer `url` with an HTTP error status
    pub fn fail(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status));
        self
    }

    /// Serve a character at its resource URL
    pub fn character(mut self, character: &Character) -> Self {
        let value = serde_json::to_value(character).unwrap_or_default();
        self.replies
            .insert(character_url(character.id), Reply::Json(value));
        self
    }

    /// Serve an episode at `url`
    pub fn episode(mut self, url: &str, episode: &Episode) -> Self {
        let value = serde_json::to_value(episode).unwrap_or_default();
        self.replies.insert(url.to_string(), Reply::Json(value));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn reply(&self, url: &str) -> Result<JsonValue> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        match self.replies.get(url) {
            Some(Reply::Json(value)) => Ok(value.clone()),
            Some(Reply::Status(status)) => Err(Error::http_status(*status, "scripted failure")),
            None => Err(Error::http_status(404, format!("no reply for {url}"))),
        }
    }
}

pub fn character_url(id: CharacterId) -> String {
    format!("mem://catalog/character/{id}")
}

#[async_trait]
impl CatalogApi for ScriptedCatalog {
    fn first_page_url(&self) -> String {
        FIRST_PAGE.to_string()
    }

    async fn fetch_page(&self, url: &str) -> Result<JsonValue> {
        self.reply(url)
    }

    async fn fetch_character(&self, id: CharacterId) -> Result<Character> {
        let value = self.reply(&character_url(id))?;
        Ok(serde_json::from_value(value)?)
    }

    async fn fetch_episode(&self, url: &str) -> Result<Episode> {
        let value = self.reply(url)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// `count` characters with ids starting at `first_id`
pub fn characters(first_id: CharacterId, count: usize) -> Vec<Character> {
    (0..count as u64)
        .map(|i| Character::new(first_id + i, format!("Character {}", first_id + i)))
        .collect()
}
