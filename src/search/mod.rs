//! Relevance search across content collections.
//!
//! Each collection is searched on its own: records are first narrowed to
//! candidates by plain containment, then scored with [`score::relevance`].
//! Results from all selected collections are merged and re-sorted by score,
//! so the collection a result came from plays no part in its rank.

mod records;
pub mod score;

pub use records::Searchable;
pub use score::{jaccard_similarity, relevance};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::content::ContentStore;

/// A searchable content collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Books,
    Blog,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Projects, Self::Books, Self::Blog];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Books => "books",
            Self::Blog => "blog",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "projects" => Ok(Self::Projects),
            "books" => Ok(Self::Books),
            "blog" => Ok(Self::Blog),
            other => Err(format!(
                "unknown collection `{other}` (expected projects, books or blog)"
            )),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of record a result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Project,
    Book,
    Blog,
}

impl ResultKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Book => "book",
            Self::Blog => "blog",
        }
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub excerpt: String,
    pub url: String,
    pub score: f64,
}

/// Rank the candidate records of one collection, highest score first.
///
/// Equal scores keep their input order.
pub fn search<'a, R, I>(records: I, query: &str) -> Vec<ScoredResult>
where
    R: Searchable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let query_lower = query.to_lowercase();
    let mut results: Vec<_> = records
        .into_iter()
        .filter(|record| record.is_candidate(&query_lower))
        .map(|record| record.to_result(relevance(&record.scored_text(), query)))
        .collect();
    sort_by_score(&mut results);
    results
}

/// Search every selected collection and merge the results by score.
///
/// Each collection is searched at most once regardless of repeats in
/// `collections`. `limit` truncates the merged list.
pub fn search_content(
    store: &ContentStore,
    query: &str,
    collections: &[Collection],
    limit: Option<usize>,
) -> Vec<ScoredResult> {
    let mut results = Vec::new();
    for collection in Collection::ALL {
        if !collections.contains(&collection) {
            continue;
        }
        let hits = match collection {
            Collection::Projects => search(store.projects(), query),
            Collection::Books => search(store.books(), query),
            Collection::Blog => search(store.blog_items(), query),
        };
        results.extend(hits);
    }

    sort_by_score(&mut results);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}

/// Stable descending sort by score.
fn sort_by_score(results: &mut [ScoredResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}
