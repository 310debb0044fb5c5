// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Roster Browser
//!
//! Load, filter and paginate the character roster of a public REST catalog.
//!
//! ## Features
//!
//! - **Full roster loading**: follows the catalog's `info.next` pointer page by page
//! - **Client-side filtering**: name, last location and type substring filters
//! - **Pagination**: fixed page size and a truncated page-button strip
//! - **Details**: one character plus all of its episodes, fetched concurrently
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_browser::catalog::CatalogClient;
//! use roster_browser::config::BrowserConfig;
//! use roster_browser::loader::RosterLoader;
//! use roster_browser::session::BrowserSession;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> roster_browser::Result<()> {
//!     let config = BrowserConfig::default();
//!     let loader = RosterLoader::new(Arc::new(CatalogClient::from_config(&config)?));
//!
//!     let mut session = BrowserSession::new();
//!     session.load(&loader).await;
//!     session.set_name_filter("rick");
//!
//!     let model = session.render();
//!     println!("{} matching, page {} of {}", model.filtered_count, model.page, model.total_pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   events   ┌────────────────┐   render   ┌──────────────┐
//! │ RosterLoader  │ ─────────▶ │ BrowserSession │ ─────────▶ │ RenderModel  │
//! └───────┬───────┘            └────────────────┘            └──────────────┘
//!         │ pages (sequential)        ▲ filters / navigation
//! ┌───────┴───────┐                   │
//! │  CatalogApi   │ ◀──── DetailsFetcher (episodes concurrently)
//! └───────┬───────┘
//!         │
//! ┌───────┴───────┐
//! │  HttpClient   │  rate limit, timeout
//! └───────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire types for the character catalog
pub mod types;

/// HTTP client with rate limiting
pub mod http;

/// Catalog API trait and HTTP implementation
pub mod catalog;

/// Pagination strategies
pub mod pagination;

/// Roster loader
pub mod loader;

/// Filter/paginate engine
pub mod engine;

/// List view session state
pub mod session;

/// Character details
pub mod details;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use engine::{FilterCriteria, PageButton, RenderModel, ViewState};
pub use loader::{Roster, RosterLoader};
pub use session::BrowserSession;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
