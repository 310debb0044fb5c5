//! CLI runner - executes commands

use super::render;
use crate::catalog::{CatalogApi, CatalogClient};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::BrowserConfig;
use crate::details::{DetailsFetcher, EpisodeJoin};
use crate::engine::{page_buttons, ViewState};
use crate::error::{Error, Result};
use crate::loader::RosterLoader;
use crate::session::BrowserSession;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                name,
                location,
                kind,
                page,
                max_pages,
                view_json,
            } => {
                let filters = ListFilters {
                    name: name.clone(),
                    location: location.clone(),
                    kind: kind.clone(),
                };
                self.list(filters, *page, *max_pages, view_json.as_deref())
                    .await
            }
            Commands::Details {
                id,
                partial_episodes,
            } => self.details(*id, *partial_episodes).await,
            Commands::Buttons { total, current } => self.buttons(*total, *current),
        }
    }

    /// Load configuration from file (or defaults) and apply CLI overrides
    fn load_config(&self) -> Result<BrowserConfig> {
        let mut config = match &self.cli.config {
            Some(path) => BrowserConfig::from_file(path)?,
            None => BrowserConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        config.validate()?;
        Ok(config)
    }

    fn catalog(config: &BrowserConfig) -> Result<Arc<dyn CatalogApi>> {
        Ok(Arc::new(CatalogClient::from_config(config)?))
    }

    /// Load the roster and print one page
    async fn list(
        &self,
        filters: ListFilters,
        page: Option<usize>,
        max_pages: Option<u32>,
        view_json: Option<&str>,
    ) -> Result<()> {
        let mut config = self.load_config()?;
        if max_pages.is_some() {
            config.loader.max_pages = max_pages;
            config.validate()?;
        }

        let loader =
            RosterLoader::new(Self::catalog(&config)?).with_max_pages(config.loader.max_pages);
        let mut session = BrowserSession::new();

        let start = Instant::now();
        let outcome = session.load(&loader).await;
        info!(
            records = outcome.roster.len(),
            pages = outcome.pages_fetched,
            complete = outcome.is_complete(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "roster load finished"
        );

        if let Some(json) = view_json {
            let view: ViewState = serde_json::from_str(json)?;
            session.restore_view(view);
        }
        filters.apply(&mut session);

        if let Some(page) = page {
            let total = session.total_pages();
            if total == 0 && page != 1 {
                return Err(Error::Other(format!(
                    "Page {page} is out of range (no pages)"
                )));
            }
            if total > 0 && !session.can_go_to(page) {
                return Err(Error::Other(format!(
                    "Page {page} is out of range (1..={total})"
                )));
            }
            session.go_to(page);
        }

        let model = session.render();
        self.emit(&model, || render::list(&model))
    }

    /// Fetch and print one character's details
    async fn details(&self, id: u64, partial_episodes: bool) -> Result<()> {
        let config = self.load_config()?;
        let join = if partial_episodes {
            EpisodeJoin::Partial
        } else {
            config.details.episode_join
        };

        let fetcher = DetailsFetcher::new(Self::catalog(&config)?).with_join(join);
        let details = fetcher.fetch(id).await.map_err(|e| {
            if e.is_not_found() {
                Error::Other(format!("No character with id {id}"))
            } else {
                e
            }
        })?;
        debug!(
            episodes = details.episodes.len(),
            missing = details.missing_episodes.len(),
            "details loaded"
        );

        self.emit(&details, || render::details(&details))
    }

    /// Print the page-button strip
    fn buttons(&self, total: usize, current: usize) -> Result<()> {
        let buttons = page_buttons(total, current);
        self.emit(&buttons, || {
            buttons
                .iter()
                .map(render::button)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Print `value` as JSON or through the pretty formatter
    fn emit<T: Serialize>(&self, value: &T, pretty: impl FnOnce() -> String) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Pretty => print!("{}", ensure_newline(pretty())),
        }
        Ok(())
    }
}

/// Filter flags given on the command line
#[derive(Debug, Default)]
struct ListFilters {
    name: Option<String>,
    location: Option<String>,
    kind: Option<String>,
}

impl ListFilters {
    /// Apply each given filter; any of them returns the view to page 1
    fn apply(self, session: &mut BrowserSession) {
        if let Some(name) = self.name {
            session.set_name_filter(name);
        }
        if let Some(location) = self.location {
            session.set_location_filter(location);
        }
        if let Some(kind) = self.kind {
            session.set_type_filter(kind);
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
