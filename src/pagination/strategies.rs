//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::types::{extract_path, NextPage, PaginationState, Paginator};
use serde_json::Value;

// ============================================================================
// Next URL Pagination
// ============================================================================

/// Next URL pagination (URL in response body)
///
/// Extracts the next page URL from a field in the response body.
/// The character catalog uses `{ "info": { "next": "...?page=2" } }`;
/// a missing, null or empty field ends pagination.
#[derive(Debug, Clone)]
pub struct NextUrlPaginator {
    /// Dotted path to the next URL in the response
    pub path: String,
}

impl Default for NextUrlPaginator {
    fn default() -> Self {
        Self {
            path: "info.next".to_string(),
        }
    }
}

impl NextUrlPaginator {
    /// Create a new next URL paginator
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Paginator for NextUrlPaginator {
    fn process_response(&self, body: &Value, state: &mut PaginationState) -> NextPage {
        state.record_page();

        match extract_path(body, &self.path).and_then(Value::as_str) {
            Some(next_url) if !next_url.is_empty() => NextPage::with_url(next_url),
            _ => NextPage::Done,
        }
    }
}

// ============================================================================
// Single Page
// ============================================================================

/// Only the first page is ever fetched
#[derive(Debug, Clone, Default)]
pub struct SinglePagePaginator;

impl Paginator for SinglePagePaginator {
    fn process_response(&self, _body: &Value, state: &mut PaginationState) -> NextPage {
        state.record_page();
        NextPage::Done
    }
}
