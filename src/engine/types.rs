//! Engine types
//!
//! Filter criteria, the serializable view state, page-button descriptors
//! and the render model handed to presentation layers.

use crate::types::{Character, CharacterId, Status};
use serde::{Deserialize, Serialize};

/// Shown when no character passes the filters
pub const NO_RESULTS_MESSAGE: &str = "No characters found matching the search criteria.";

// ============================================================================
// Filter criteria
// ============================================================================

/// Three independent case-insensitive substring filters.
///
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub name: String,
    /// Matched against the last known location name
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl FilterCriteria {
    /// Create empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name filter
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the location filter
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the type filter
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Whether all three filters are empty
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.location.is_empty() && self.kind.is_empty()
    }

    /// Whether `character` passes all three filters
    pub fn matches(&self, character: &Character) -> bool {
        contains_ignore_case(&character.name, &self.name)
            && contains_ignore_case(character.location_name(), &self.location)
            && contains_ignore_case(&character.kind, &self.kind)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// View state
// ============================================================================

/// The user-controlled part of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub criteria: FilterCriteria,
    /// Current 1-based page
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: first_page(),
        }
    }
}

impl ViewState {
    /// Create a view on page 1 with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the name filter and return to page 1
    pub fn set_name_filter(&mut self, name: impl Into<String>) {
        self.criteria.name = name.into();
        self.page = 1;
    }

    /// Change the location filter and return to page 1
    pub fn set_location_filter(&mut self, location: impl Into<String>) {
        self.criteria.location = location.into();
        self.page = 1;
    }

    /// Change the type filter and return to page 1
    pub fn set_type_filter(&mut self, kind: impl Into<String>) {
        self.criteria.kind = kind.into();
        self.page = 1;
    }

    /// Replace every filter at once and return to page 1
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Move to `page`. Not range-checked: callers gate it with [`Self::can_go_to`].
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    /// Whether `page` is a valid target given `total_pages`
    pub fn can_go_to(page: usize, total_pages: usize) -> bool {
        (1..=total_pages).contains(&page)
    }

    /// Pull the current page back into `1..=total_pages` (page 1 when there are none)
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

// ============================================================================
// Page buttons
// ============================================================================

/// One entry in the page-button strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    /// A clickable page number
    Page { number: usize, current: bool },
    /// A non-clickable gap marker
    Ellipsis,
}

impl PageButton {
    /// Page number, `None` for an ellipsis
    pub fn number(&self) -> Option<usize> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    /// Whether this is the highlighted current page
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { current: true, .. })
    }
}

impl std::fmt::Display for PageButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page { number, .. } => write!(f, "{number}"),
            Self::Ellipsis => write!(f, "…"),
        }
    }
}

// ============================================================================
// Render model
// ============================================================================

/// Card-level summary of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub status_kind: Status,
    /// Status badge colour (`green`, `red` or `gray`)
    pub badge_color: String,
    pub kind: String,
    pub episode_count: usize,
    pub last_location: String,
    pub image: String,
}

impl From<&Character> for Card {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            status: character.status.clone(),
            status_kind: character.status_kind(),
            badge_color: character.status_kind().badge_color().to_string(),
            kind: character.kind.clone(),
            episode_count: character.episode_count(),
            last_location: character.location_name().to_string(),
            image: character.image.clone(),
        }
    }
}

/// Everything a presentation layer needs to draw the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Cards on the current page
    pub cards: Vec<Card>,
    /// Page-button strip
    pub buttons: Vec<PageButton>,
    /// Current page
    pub page: usize,
    pub total_pages: usize,
    /// Characters passing the filters
    pub filtered_count: usize,
    /// Characters loaded
    pub total_count: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// The roster is still loading
    pub loading: bool,
    /// Nothing passes the filters
    pub empty: bool,
    /// Empty-state message, set only when `empty` and not loading
    pub message: Option<String>,
    /// Why loading stopped early, if it did
    pub error: Option<String>,
}
