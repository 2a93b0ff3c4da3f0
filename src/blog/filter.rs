//! Blog list filtering by free text and tag.
//!
//! A series is kept when its own fields match, or when any one of its parts
//! does. The whole series is kept in that case, not just the matching parts.

use super::visitor::BlogVisitor;
use crate::content::{ContentItem, SeriesItem, SoloItem};

/// Text + tag predicate over blog items.
///
/// Both inputs are lowercased once at construction.
#[derive(Debug, Clone)]
pub struct FilterVisitor {
    query: String,
    tag: Option<String>,
}

impl FilterVisitor {
    /// An empty `tag` is the same as no tag filter.
    pub fn new(query: &str, tag: Option<&str>) -> Self {
        Self {
            query: query.to_lowercase(),
            tag: tag.filter(|t| !t.is_empty()).map(str::to_lowercase),
        }
    }

    #[inline]
    fn text_matches(&self, fields: &[&str]) -> bool {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// Exact (not substring) comparison against each tag.
    #[inline]
    fn tag_matches(&self, tags: &[String]) -> bool {
        match &self.tag {
            None => true,
            Some(wanted) => tags.iter().any(|tag| tag.to_lowercase() == *wanted),
        }
    }
}

impl BlogVisitor for FilterVisitor {
    type Output = bool;

    fn visit_solo(&self, post: &SoloItem) -> bool {
        self.text_matches(&[post.title.as_str(), post.excerpt.as_str()])
            && self.tag_matches(&post.tags)
    }

    fn visit_series(&self, series: &SeriesItem) -> bool {
        let fields = [
            series.title.as_str(),
            series.description.as_str(),
            series.excerpt.as_str(),
        ];
        let own = self.text_matches(&fields) && self.tag_matches(&series.tags);

        own || series.posts.iter().any(|post| self.visit_solo(post))
    }
}

/// Whether `item` passes the text query and optional tag filter.
pub fn matches(item: &ContentItem, query: &str, tag: Option<&str>) -> bool {
    item.accept(&FilterVisitor::new(query, tag))
}

/// Items passing the filter, in input order.
pub fn filter_blog_items<'a>(
    items: &'a [ContentItem],
    query: &str,
    tag: Option<&str>,
) -> Vec<&'a ContentItem> {
    let visitor = FilterVisitor::new(query, tag);
    items.iter().filter(|item| item.accept(&visitor)).collect()
}
