//! Blog content computations.
//!
//! Everything here is a pure function of the items passed in:
//!
//! - [`visitor`]: kind dispatch and the stock visitors
//! - [`metadata`]: display metadata, aggregated over series parts
//! - [`filter`]: text + tag filtering with series recursion

pub mod filter;
pub mod metadata;
pub mod visitor;

pub use filter::{FilterVisitor, filter_blog_items, matches};
pub use metadata::{MetadataVisitor, SeriesMetadata, aggregate_metadata};
pub use visitor::{AllTagsVisitor, BlogVisitor, CountVisitor, FlattenVisitor, SearchVisitor};

use crate::content::{ContentItem, SoloItem};
use crate::utils::set::OrderedSet;

/// Every tag used across `items`, deduplicated in first-appearance order.
pub fn list_all_tags(items: &[ContentItem]) -> Vec<String> {
    let mut tags = OrderedSet::new();
    for item in items {
        tags.extend(item.accept(&AllTagsVisitor));
    }
    tags.into_vec()
}

/// All solo posts, series expanded in reading order.
pub fn flatten_posts(items: &[ContentItem]) -> Vec<SoloItem> {
    items
        .iter()
        .flat_map(|item| item.accept(&FlattenVisitor))
        .collect()
}

/// Total number of posts, counting each series part.
pub fn post_count(items: &[ContentItem]) -> usize {
    items.iter().map(|item| item.accept(&CountVisitor)).sum()
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use crate::content::{SeriesItem, SoloItem};

    pub fn post(id: &str, date: &str, reading_time: u32) -> SoloItem {
        SoloItem {
            id: id.to_string(),
            title: format!("Post {id}"),
            slug: id.to_string(),
            excerpt: format!("Excerpt for {id}"),
            category: "engineering".to_string(),
            tags: vec![],
            date: date.to_string(),
            reading_time,
            featured: false,
            authors: vec!["Ada Lovelace".to_string()],
            cover_image: None,
            external_link: None,
        }
    }

    pub fn series(id: &str, posts: Vec<SoloItem>) -> SeriesItem {
        SeriesItem {
            id: id.to_string(),
            title: format!("Series {id}"),
            description: String::new(),
            excerpt: "Series overview".to_string(),
            category: "engineering".to_string(),
            tags: vec![],
            date: String::new(),
            featured: false,
            cover_image: None,
            posts,
        }
    }
}
