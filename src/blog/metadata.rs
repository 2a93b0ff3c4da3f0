//! Display metadata for list and grid views.
//!
//! A solo post reports its own fields. A series is always summarized from its
//! parts; its own `date` and `tags` only fill in where children have nothing
//! to say.
//!
//! | Field          | Series reduction                                  |
//! |----------------|---------------------------------------------------|
//! | `date`         | earliest parseable child date, else series date   |
//! | `authors`      | union of child authors                            |
//! | `reading_time` | sum of child reading times                        |
//! | `tags`         | series tags ∪ child tags                          |

use serde::Serialize;

use super::visitor::BlogVisitor;
use crate::content::{ContentItem, SeriesItem, SoloItem};
use crate::utils::{date::ContentDate, set::OrderedSet};

/// Summary of a blog item, uniform across kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesMetadata {
    pub date: String,
    pub authors: Vec<String>,
    pub reading_time: u32,
    pub tags: Vec<String>,
}

/// Computes [`SeriesMetadata`] for any item.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataVisitor;

impl BlogVisitor for MetadataVisitor {
    type Output = SeriesMetadata;

    fn visit_solo(&self, post: &SoloItem) -> SeriesMetadata {
        SeriesMetadata {
            date: post.date.clone(),
            authors: post.authors.clone(),
            reading_time: post.reading_time,
            tags: post.tags.clone(),
        }
    }

    fn visit_series(&self, series: &SeriesItem) -> SeriesMetadata {
        let posts = &series.posts;
        if posts.is_empty() {
            return SeriesMetadata {
                date: series.date.clone(),
                authors: Vec::new(),
                reading_time: 0,
                tags: series.tags.clone(),
            };
        }

        // Unparseable child dates drop out of the minimum
        let date = posts
            .iter()
            .filter_map(|post| ContentDate::parse(&post.date))
            .min()
            .map_or_else(|| series.date.clone(), ContentDate::to_date_string);

        let mut authors = OrderedSet::new();
        let mut tags: OrderedSet = series.tags.iter().collect();
        for post in posts {
            authors.extend(&post.authors);
            tags.extend(&post.tags);
        }

        let reading_time = posts
            .iter()
            .fold(0u32, |total, post| total.saturating_add(post.reading_time));

        SeriesMetadata {
            date,
            authors: authors.into_vec(),
            reading_time,
            tags: tags.into_vec(),
        }
    }
}

/// Aggregated display metadata for one item.
pub fn aggregate_metadata(item: &ContentItem) -> SeriesMetadata {
    item.accept(&MetadataVisitor)
}
