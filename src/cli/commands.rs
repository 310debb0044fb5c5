//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the character catalog
#[derive(Parser, Debug)]
#[command(name = "roster-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog API root, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every character and show one filtered page
    List {
        /// Case-insensitive name filter
        #[arg(long)]
        name: Option<String>,

        /// Case-insensitive last-location filter
        #[arg(long)]
        location: Option<String>,

        /// Case-insensitive type filter
        #[arg(long = "type")]
        kind: Option<String>,

        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Stop loading after this many remote pages
        #[arg(long)]
        max_pages: Option<u32>,

        /// Saved view state JSON; filter flags are applied on top
        #[arg(long)]
        view_json: Option<String>,
    },

    /// Show a character and the episodes it appears in
    Details {
        /// Character id
        id: u64,

        /// Keep episodes that loaded even if others failed
        #[arg(long)]
        partial_episodes: bool,
    },

    /// Print the page-button strip
    Buttons {
        /// Total number of pages
        total: usize,

        /// Current page
        current: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
