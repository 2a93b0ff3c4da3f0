//! Kind dispatch over blog content.
//!
//! A computation over [`ContentItem`] supplies one handler per kind, either as
//! a [`BlogVisitor`] implementation or as a pair of closures. Dispatch is an
//! exhaustive `match`, so a new kind fails to compile until every visitor
//! handles it.

use crate::content::{ContentItem, SeriesItem, SoloItem};
use crate::utils::set::OrderedSet;

/// Handler set producing a uniform result for each content kind.
pub trait BlogVisitor {
    type Output;

    fn visit_solo(&self, post: &SoloItem) -> Self::Output;

    fn visit_series(&self, series: &SeriesItem) -> Self::Output;
}

impl ContentItem {
    /// Route to the visitor's handler for this item's kind.
    pub fn accept<V: BlogVisitor + ?Sized>(&self, visitor: &V) -> V::Output {
        match self {
            Self::Solo(post) => visitor.visit_solo(post),
            Self::Series(series) => visitor.visit_series(series),
        }
    }

    /// Closure form of [`ContentItem::accept`].
    pub fn dispatch<T>(
        &self,
        on_solo: impl FnOnce(&SoloItem) -> T,
        on_series: impl FnOnce(&SeriesItem) -> T,
    ) -> T {
        match self {
            Self::Solo(post) => on_solo(post),
            Self::Series(series) => on_series(series),
        }
    }
}

// ============================================================================
// Stock Visitors
// ============================================================================

/// Loose containment search across every text field, including tags and
/// authors (substring, not exact), recursing into series posts.
#[derive(Debug, Clone)]
pub struct SearchVisitor {
    query: String,
}

impl SearchVisitor {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }

    #[inline]
    fn contains(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.query)
    }

    #[inline]
    fn any_contains(&self, values: &[String]) -> bool {
        values.iter().any(|v| self.contains(v))
    }
}

impl BlogVisitor for SearchVisitor {
    type Output = bool;

    fn visit_solo(&self, post: &SoloItem) -> bool {
        self.contains(&post.title)
            || self.contains(&post.excerpt)
            || self.any_contains(&post.tags)
            || self.any_contains(&post.authors)
    }

    fn visit_series(&self, series: &SeriesItem) -> bool {
        self.contains(&series.title)
            || self.contains(&series.description)
            || self.contains(&series.excerpt)
            || self.any_contains(&series.tags)
            || series.posts.iter().any(|post| self.visit_solo(post))
    }
}

/// Every solo post of an item: itself, or the series' parts in reading order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenVisitor;

impl BlogVisitor for FlattenVisitor {
    type Output = Vec<SoloItem>;

    fn visit_solo(&self, post: &SoloItem) -> Vec<SoloItem> {
        vec![post.clone()]
    }

    fn visit_series(&self, series: &SeriesItem) -> Vec<SoloItem> {
        series.posts.clone()
    }
}

/// Tag union of an item: series tags first, then each child's, deduplicated.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTagsVisitor;

impl BlogVisitor for AllTagsVisitor {
    type Output = Vec<String>;

    fn visit_solo(&self, post: &SoloItem) -> Vec<String> {
        post.tags.clone()
    }

    fn visit_series(&self, series: &SeriesItem) -> Vec<String> {
        let mut tags: OrderedSet = series.tags.iter().collect();
        for post in &series.posts {
            tags.extend(&post.tags);
        }
        tags.into_vec()
    }
}

/// Number of posts an item stands for.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountVisitor;

impl BlogVisitor for CountVisitor {
    type Output = usize;

    fn visit_solo(&self, _post: &SoloItem) -> usize {
        1
    }

    fn visit_series(&self, series: &SeriesItem) -> usize {
        series.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::test_fixtures::{post, series};

    #[test]
    fn test_accept_routes_by_kind() {
        struct KindName;
        impl BlogVisitor for KindName {
            type Output = &'static str;
            fn visit_solo(&self, _: &SoloItem) -> &'static str {
                "solo"
            }
            fn visit_series(&self, _: &SeriesItem) -> &'static str {
                "series"
            }
        }

        let solo = ContentItem::Solo(post("a", "2024-01-01", 3));
        let composite = ContentItem::Series(series("s", vec![post("b", "2024-01-02", 4)]));
        assert_eq!(solo.accept(&KindName), "solo");
        assert_eq!(composite.accept(&KindName), "series");
    }

    #[test]
    fn test_dispatch_closures() {
        let item = ContentItem::Series(series(
            "s",
            vec![post("a", "2024-01-01", 3), post("b", "2024-01-02", 4)],
        ));
        let parts = item.dispatch(|_| 1, |s| s.posts.len());
        assert_eq!(parts, 2);
    }

    #[test]
    fn test_accept_through_trait_object() {
        let visitor: &dyn BlogVisitor<Output = usize> = &CountVisitor;
        let item = ContentItem::Solo(post("a", "2024-01-01", 3));
        assert_eq!(item.accept(visitor), 1);
    }

    #[test]
    fn test_flatten_keeps_reading_order() {
        let item = ContentItem::Series(series(
            "s",
            vec![
                post("p3", "2024-03-01", 1),
                post("p1", "2024-01-01", 1),
                post("p2", "2024-02-01", 1),
            ],
        ));
        let ids: Vec<_> = item.accept(&FlattenVisitor).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_all_tags_series_union() {
        let mut first = post("a", "2024-01-01", 1);
        first.tags = vec!["rust".into(), "cli".into()];
        let mut second = post("b", "2024-01-02", 1);
        second.tags = vec!["cli".into(), "async".into()];
        let mut composite = series("s", vec![first, second]);
        composite.tags = vec!["series-tag".into(), "rust".into()];

        let tags = ContentItem::Series(composite).accept(&AllTagsVisitor);
        assert_eq!(tags, vec!["series-tag", "rust", "cli", "async"]);
    }

    #[test]
    fn test_count() {
        assert_eq!(ContentItem::Solo(post("a", "2024-01-01", 1)).accept(&CountVisitor), 1);
        assert_eq!(ContentItem::Series(series("s", vec![])).accept(&CountVisitor), 0);
    }

    #[test]
    fn test_search_visitor_matches_authors_and_tag_substrings() {
        let mut p = post("a", "2024-01-01", 1);
        p.authors = vec!["Grace Hopper".into()];
        p.tags = vec!["compilers".into()];
        let item = ContentItem::Solo(p);

        assert!(item.accept(&SearchVisitor::new("hopper")));
        assert!(item.accept(&SearchVisitor::new("compil")));
        assert!(!item.accept(&SearchVisitor::new("kubernetes")));
    }

    #[test]
    fn test_search_visitor_recurses_into_series() {
        let mut child = post("a", "2024-01-01", 1);
        child.excerpt = "Scheduling pods on Kubernetes".into();
        let item = ContentItem::Series(series("s", vec![child]));

        assert!(item.accept(&SearchVisitor::new("KUBERNETES")));
    }
}
