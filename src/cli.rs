//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::content::{ProjectStatus, ReadingStatus};
use crate::search::Collection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio content CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Content data directory (relative to project root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List blog posts and series, optionally filtered
    Blog {
        /// Case-insensitive text to look for in titles, descriptions and excerpts
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only keep items carrying this tag (exact, case-insensitive)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List every tag used across the blog
    Tags,

    /// Show aggregated metadata for one blog item
    Meta {
        /// Blog item id
        id: String,
    },

    /// Relevance search across content collections
    Search {
        /// Free-text query
        query: String,

        /// Collections to search, comma separated (projects, books, blog)
        #[arg(long = "in", value_delimiter = ',')]
        collections: Vec<Collection>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List visible projects
    Projects {
        /// completed, in-progress, planning or archived
        #[arg(short, long)]
        status: Option<ProjectStatus>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List books in the library
    Library {
        /// want-to-read, currently-reading, read or did-not-finish
        #[arg(short, long)]
        status: Option<ReadingStatus>,
    },
}
