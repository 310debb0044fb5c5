//! Roster loader
//!
//! Fetches every character page by following the catalog's "next" pointer
//! and accumulates the records into one [`Roster`].
//!
//! Requests are strictly sequential: page N+1 is requested only once page
//! N (and therefore its pointer) is known, so the roster keeps remote page
//! order. A failed request ends the load quietly; the error is logged and
//! whatever was accumulated is kept.

mod types;

pub use types::{LoadOutcome, Roster, RosterEvent};

use crate::catalog::CatalogApi;
use crate::error::{Error, Result};
use crate::pagination::{NextPage, NextUrlPaginator, PaginationState, Paginator};
use crate::types::{CharacterPage, JsonValue};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Loads the full roster from a catalog
pub struct RosterLoader {
    api: Arc<dyn CatalogApi>,
    paginator: Box<dyn Paginator>,
    max_pages: Option<u32>,
}

impl RosterLoader {
    /// Create a loader following `info.next`
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            paginator: Box::new(NextUrlPaginator::default()),
            max_pages: None,
        }
    }

    /// Use a different pagination strategy
    #[must_use]
    pub fn with_paginator(mut self, paginator: Box<dyn Paginator>) -> Self {
        self.paginator = paginator;
        self
    }

    /// Stop after this many pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Load the roster
    pub async fn load(&self) -> LoadOutcome {
        self.run(None).await
    }

    /// Load the roster, sending progress events to `events`
    pub async fn load_with_events(&self, events: UnboundedSender<RosterEvent>) -> LoadOutcome {
        self.run(Some(&events)).await
    }

    async fn run(&self, events: Option<&UnboundedSender<RosterEvent>>) -> LoadOutcome {
        let mut roster = Roster::new();
        let mut page_size = 0;
        let mut state = PaginationState::new();
        let mut url = self.api.first_page_url();

        loop {
            let page_number = state.pages + 1;

            let (body, page) = match self.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(page = page_number, url = %url, "failed to fetch roster page: {e}");
                    let message = e.to_string();
                    emit(events, || RosterEvent::Failed {
                        page: page_number,
                        message: message.clone(),
                    });
                    return LoadOutcome {
                        roster,
                        page_size,
                        pages_fetched: state.pages,
                        failure: Some(message),
                    };
                }
            };
            let records = page.results;

            let next = self.paginator.process_response(&body, &mut state);
            debug!(
                page = page_number,
                records = records.len(),
                has_next = next.is_continue(),
                "roster page loaded"
            );

            if page_number == 1 {
                page_size = records.len();
                info!(
                    page_size,
                    catalog_count = ?page.info.count,
                    catalog_pages = ?page.info.pages,
                    "first roster page loaded"
                );
                emit(events, || RosterEvent::FirstPage {
                    records: records.clone(),
                    page_size,
                });
            } else {
                emit(events, || RosterEvent::PageAppended {
                    page: page_number,
                    records: records.clone(),
                });
            }
            roster.append(records);

            match next {
                NextPage::Done => {
                    roster.freeze();
                    info!(
                        total = roster.len(),
                        pages = state.pages,
                        "roster fully loaded"
                    );
                    emit(events, || RosterEvent::Completed {
                        total: roster.len(),
                        pages: state.pages,
                    });
                    break;
                }
                NextPage::Continue { url: next_url } => {
                    if self.max_pages.is_some_and(|max| state.pages >= max) {
                        info!(
                            total = roster.len(),
                            pages = state.pages,
                            "page cap reached, roster left incomplete"
                        );
                        emit(events, || RosterEvent::Truncated {
                            total: roster.len(),
                            pages: state.pages,
                        });
                        break;
                    }
                    url = next_url;
                }
            }
        }

        LoadOutcome {
            roster,
            page_size,
            pages_fetched: state.pages,
            failure: None,
        }
    }

    /// Fetch one page and decode it; the raw body is kept for the paginator
    async fn fetch(&self, url: &str) -> Result<(JsonValue, CharacterPage)> {
        let body = self.api.fetch_page(url).await?;
        let page = CharacterPage::deserialize(&body)
            .map_err(|e| Error::decode(format!("invalid character page: {e}")))?;
        Ok((body, page))
    }
}

impl std::fmt::Debug for RosterLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterLoader")
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

/// Send an event if anyone is listening. A dropped receiver is not an error.
fn emit(events: Option<&UnboundedSender<RosterEvent>>, event: impl FnOnce() -> RosterEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event());
    }
}
