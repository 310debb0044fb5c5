//! Browser session
//!
//! Holds the in-memory state of the list view: the roster as it loads, the
//! page size and the [`ViewState`]. State changes arrive through explicit
//! handlers, either loader events ([`BrowserSession::apply`]) or user
//! intents (filter edits, navigation). Rendering is delegated to
//! [`engine::render`].

use crate::engine::{self, FilterCriteria, RenderModel, ViewState};
use crate::loader::{LoadOutcome, Roster, RosterEvent, RosterLoader};
use tokio::sync::mpsc;
use tracing::debug;

/// State behind one list view
#[derive(Debug, Clone, Default)]
pub struct BrowserSession {
    roster: Roster,
    page_size: usize,
    view: ViewState,
    loading: bool,
    last_error: Option<String>,
}

impl BrowserSession {
    /// Create an empty session on page 1 with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Page size, zero until the first page arrives
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether a load is in progress
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the failure that stopped the last load
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of pages for the current filters
    pub fn total_pages(&self) -> usize {
        let filtered = engine::visible(self.roster.records(), &self.view.criteria).len();
        engine::page_count(filtered, self.page_size)
    }

    /// Run `loader`, applying its events to this session as they arrive
    pub async fn load(&mut self, loader: &RosterLoader) -> LoadOutcome {
        let (tx, mut rx) = mpsc::unbounded_channel();
        self.loading = true;
        self.last_error = None;

        let drain = async {
            while let Some(event) = rx.recv().await {
                self.apply(event);
            }
        };
        let (outcome, ()) = tokio::join!(loader.load_with_events(tx), drain);

        self.loading = false;
        outcome
    }

    /// Apply one loader event
    pub fn apply(&mut self, event: RosterEvent) {
        match event {
            RosterEvent::FirstPage { records, page_size } => {
                self.roster = Roster::from_first_page(records);
                self.page_size = page_size;
                self.loading = true;
            }
            RosterEvent::PageAppended { page, records } => {
                debug!(page, records = records.len(), "session received page");
                self.roster.append(records);
            }
            RosterEvent::Completed { .. } => {
                self.roster.freeze();
                self.loading = false;
            }
            RosterEvent::Truncated { .. } => {
                self.loading = false;
            }
            RosterEvent::Failed { message, .. } => {
                self.loading = false;
                self.last_error = Some(message);
            }
        }
        self.clamp_page();
    }

    /// Change the name filter; returns to page 1
    pub fn set_name_filter(&mut self, name: impl Into<String>) {
        self.view.set_name_filter(name);
    }

    /// Change the location filter; returns to page 1
    pub fn set_location_filter(&mut self, location: impl Into<String>) {
        self.view.set_location_filter(location);
    }

    /// Change the type filter; returns to page 1
    pub fn set_type_filter(&mut self, kind: impl Into<String>) {
        self.view.set_type_filter(kind);
    }

    /// Replace all filters; returns to page 1
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.view.set_criteria(criteria);
    }

    /// Restore a saved view, clamping its page into range
    pub fn restore_view(&mut self, view: ViewState) {
        self.view = view;
        self.clamp_page();
    }

    /// Whether `page` is currently a valid navigation target
    pub fn can_go_to(&self, page: usize) -> bool {
        ViewState::can_go_to(page, self.total_pages())
    }

    /// Navigate to `page` without range checks; see [`Self::can_go_to`]
    pub fn go_to(&mut self, page: usize) {
        self.view.go_to(page);
    }

    /// Render the current state
    pub fn render(&self) -> RenderModel {
        let mut model = engine::render(
            self.roster.records(),
            self.page_size,
            &self.view,
            self.loading,
        );
        model.error.clone_from(&self.last_error);
        model
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.view.clamp(total);
    }
}
