//! Common types used throughout the roster browser
//!
//! Wire types for the character catalog API plus small helpers
//! shared by the loader, the engine and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Identifier of a character in the catalog
pub type CharacterId = u64;

/// Read `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Character
// ============================================================================

/// A named place reference (origin or last known location)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// One character record as returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Life status text ("Alive", "Dead", "unknown", ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub species: String,

    /// Free-text subtype, frequently empty
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,

    #[serde(default)]
    pub origin: Option<Place>,

    /// Last known location
    #[serde(default)]
    pub location: Option<Place>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    /// Episode resource URLs, in catalog order
    #[serde(default, rename = "episode", deserialize_with = "null_as_default")]
    pub episodes: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Character {
    /// Create a character with only the fields the filters look at
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: String::new(),
            species: String::new(),
            kind: String::new(),
            gender: String::new(),
            origin: None,
            location: None,
            image: String::new(),
            episodes: Vec::new(),
            url: String::new(),
            created: None,
        }
    }

    /// Set the last known location name
    #[must_use]
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.location = Some(Place {
            name: name.into(),
            url: String::new(),
        });
        self
    }

    /// Set the free-text type
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the status text
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Last known location name, empty when absent
    pub fn location_name(&self) -> &str {
        self.location.as_ref().map_or("", |p| p.name.as_str())
    }

    /// Origin name, empty when absent
    pub fn origin_name(&self) -> &str {
        self.origin.as_ref().map_or("", |p| p.name.as_str())
    }

    /// Classified life status
    pub fn status_kind(&self) -> Status {
        Status::from_text(&self.status)
    }

    /// Number of episodes the character appears in
    pub fn episode_count(&self) -> usize {
        self.episodes.len()
    }
}

// ============================================================================
// Status
// ============================================================================

/// Life status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Alive,
    Dead,
    Unknown,
}

impl Status {
    /// Classify status text, case-insensitively
    pub fn from_text(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "alive" => Status::Alive,
            "dead" => Status::Dead,
            _ => Status::Unknown,
        }
    }

    /// Badge colour used by presentation layers
    pub fn badge_color(self) -> &'static str {
        match self {
            Status::Alive => "green",
            Status::Dead => "red",
            Status::Unknown => "gray",
        }
    }
}

// ============================================================================
// Episode
// ============================================================================

/// One episode as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub air_date: String,
    /// Episode code such as `S01E01`
    #[serde(default, rename = "episode", deserialize_with = "null_as_default")]
    pub code: String,
}

// ============================================================================
// Page envelope
// ============================================================================

/// Catalog-wide totals reported with every character page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Characters in the whole catalog
    #[serde(default)]
    pub count: Option<u64>,
    /// Pages in the whole catalog
    #[serde(default)]
    pub pages: Option<u64>,
}

/// A page of characters (`{ info, results }`); missing or null parts read as empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: PageInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Character>,
}
