//! Folio - content aggregation and search for a portfolio site.
//!
//! Projects, books and blog entries are loaded once from JSON into a
//! [`content::ContentStore`]. Blog entries are either solo posts or series
//! of posts; [`blog`] dispatches over the two shapes, [`search`] ranks
//! records from every collection on one scale.

pub mod blog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod memo;
pub mod search;
pub mod utils;

pub use blog::{SeriesMetadata, aggregate_metadata, filter_blog_items};
pub use content::{ContentError, ContentItem, ContentStore};
pub use memo::MetadataMemo;
pub use search::{Collection, ScoredResult, search_content};
