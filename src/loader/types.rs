//! Roster loader types
//!
//! The accumulated roster, the events a load emits, and its final outcome.

use crate::types::Character;
use serde::Serialize;
use tracing::warn;

// ============================================================================
// Roster
// ============================================================================

/// All characters loaded so far, in remote page order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    records: Vec<Character>,
    complete: bool,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a still-loading roster seeded with a first page
    pub fn from_first_page(records: Vec<Character>) -> Self {
        Self {
            records,
            complete: false,
        }
    }

    /// Loaded records
    pub fn records(&self) -> &[Character] {
        &self.records
    }

    /// Number of loaded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the last remote page has been seen
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Append a page of records. Ignored once the roster is frozen.
    pub fn append(&mut self, page: Vec<Character>) {
        if self.complete {
            warn!(records = page.len(), "ignoring page appended to a complete roster");
            return;
        }
        self.records.extend(page);
    }

    /// Freeze the roster; no further pages are accepted
    pub fn freeze(&mut self) {
        self.complete = true;
    }
}

// ============================================================================
// Events
// ============================================================================

/// Progress notifications emitted while loading, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    /// The first page arrived; its length is the page size
    FirstPage {
        records: Vec<Character>,
        page_size: usize,
    },
    /// A follow-up page arrived
    PageAppended {
        /// 1-based remote page number
        page: u32,
        records: Vec<Character>,
    },
    /// The last page has been seen
    Completed { total: usize, pages: u32 },
    /// Loading stopped at the configured page cap
    Truncated { total: usize, pages: u32 },
    /// A request failed; loading stopped
    Failed {
        /// 1-based remote page number that failed
        page: u32,
        message: String,
    },
}

impl RosterEvent {
    /// Whether this event ends the load
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed { .. } | Self::Truncated { .. } | Self::Failed { .. }
        )
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a roster load. Never an error: failures are reported here.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// Everything accumulated before the load ended
    pub roster: Roster,
    /// Length of the first page, zero if it never arrived
    pub page_size: usize,
    /// Pages successfully fetched
    pub pages_fetched: u32,
    /// Message of the failure that stopped the load
    pub failure: Option<String>,
}

impl LoadOutcome {
    /// Whether every remote page was loaded
    pub fn is_complete(&self) -> bool {
        self.roster.is_complete()
    }
}
