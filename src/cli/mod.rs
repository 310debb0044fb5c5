//! CLI module
//!
//! Command-line front end over the browser library.
//!
//! # Commands
//!
//! - `list` - Load the roster and show one filtered page
//! - `details` - Show a character and its episodes
//! - `buttons` - Print the page-button strip for a page count

mod commands;
mod logging;
mod render;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use logging::log_filter;
pub use runner::Runner;
