//! How each content record takes part in relevance search.
//!
//! | Record  | Candidate when the query is contained in       | Scored text                  |
//! |---------|------------------------------------------------|------------------------------|
//! | Project | title, description, a tag or a technology      | title, description           |
//! | Book    | title, author or a genre                       | title, author                |
//! | Blog    | any field, tags, authors or a series part      | title, description, excerpt  |

use super::{ResultKind, ScoredResult};
use crate::blog::SearchVisitor;
use crate::content::{Book, ContentItem, Project};

/// A record that can be ranked by [`super::search`].
///
/// `query_lower` is already lowercased.
pub trait Searchable {
    fn is_candidate(&self, query_lower: &str) -> bool;

    fn scored_text(&self) -> String;

    fn to_result(&self, score: f64) -> ScoredResult;
}

#[inline]
fn contains(text: &str, query_lower: &str) -> bool {
    text.to_lowercase().contains(query_lower)
}

/// Join the non-empty parts with a single space.
fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Searchable for Project {
    fn is_candidate(&self, query_lower: &str) -> bool {
        self.visible
            && (contains(&self.title, query_lower)
                || contains(&self.description, query_lower)
                || self.tags.iter().any(|t| contains(t, query_lower))
                || self.technologies.iter().any(|t| contains(t, query_lower)))
    }

    fn scored_text(&self) -> String {
        join_fields(&[self.title.as_str(), self.description.as_str()])
    }

    fn to_result(&self, score: f64) -> ScoredResult {
        ScoredResult {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: ResultKind::Project,
            excerpt: self.description.clone(),
            url: format!("/projects/{}", self.id),
            score,
        }
    }
}

impl Searchable for Book {
    fn is_candidate(&self, query_lower: &str) -> bool {
        contains(&self.title, query_lower)
            || contains(&self.author, query_lower)
            || self.genre.iter().any(|g| contains(g, query_lower))
    }

    fn scored_text(&self) -> String {
        join_fields(&[self.title.as_str(), self.author.as_str()])
    }

    fn to_result(&self, score: f64) -> ScoredResult {
        ScoredResult {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: ResultKind::Book,
            excerpt: self.review.clone().unwrap_or_else(|| self.author.clone()),
            url: format!("/library/{}", self.id),
            score,
        }
    }
}

impl Searchable for ContentItem {
    fn is_candidate(&self, query_lower: &str) -> bool {
        self.accept(&SearchVisitor::new(query_lower))
    }

    fn scored_text(&self) -> String {
        self.dispatch(
            |post| join_fields(&[post.title.as_str(), post.excerpt.as_str()]),
            |series| {
                join_fields(&[
                    series.title.as_str(),
                    series.description.as_str(),
                    series.excerpt.as_str(),
                ])
            },
        )
    }

    fn to_result(&self, score: f64) -> ScoredResult {
        ScoredResult {
            id: self.id().to_string(),
            title: self.title().to_string(),
            kind: ResultKind::Blog,
            excerpt: self.excerpt().to_string(),
            url: self.url(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::test_fixtures::{post, series};
    use crate::content::{ProjectStatus, ReadingStatus};

    fn project() -> Project {
        Project {
            id: "folio".into(),
            title: "Folio".into(),
            description: "Portfolio site generator".into(),
            long_description: None,
            category: "web".into(),
            tags: vec!["static-site".into()],
            technologies: vec!["Rust".into(), "TypeScript".into()],
            features: vec![],
            status: ProjectStatus::Completed,
            start_date: "2024-01-01".into(),
            end_date: None,
            featured: false,
            visible: true,
            github_url: None,
            demo_url: None,
        }
    }

    #[test]
    fn test_project_candidate_by_technology() {
        let p = project();
        assert!(p.is_candidate("typescript"));
        assert!(p.is_candidate("static"));
        assert!(!p.is_candidate("kotlin"));
    }

    #[test]
    fn test_hidden_project_never_candidate() {
        let mut p = project();
        p.visible = false;
        assert!(!p.is_candidate("folio"));
    }

    #[test]
    fn test_project_result_shape() {
        let result = project().to_result(12.5);
        assert_eq!(result.url, "/projects/folio");
        assert_eq!(result.excerpt, "Portfolio site generator");
        assert_eq!(result.kind, ResultKind::Project);
        assert_eq!(project().scored_text(), "Folio Portfolio site generator");
    }

    #[test]
    fn test_book_excerpt_prefers_review() {
        let mut book = Book {
            id: "ddia".into(),
            title: "Designing Data-Intensive Applications".into(),
            author: "Martin Kleppmann".into(),
            genre: vec!["Distributed Systems".into()],
            rating: Some(5),
            review: None,
            reading_status: ReadingStatus::Read,
            favorite: true,
            published_date: None,
        };
        assert_eq!(book.to_result(1.0).excerpt, "Martin Kleppmann");
        assert!(book.is_candidate("distributed"));

        book.review = Some("Essential reading".into());
        let result = book.to_result(1.0);
        assert_eq!(result.excerpt, "Essential reading");
        assert_eq!(result.url, "/library/ddia");
    }

    #[test]
    fn test_series_scored_text_skips_empty_description() {
        let item = ContentItem::Series(series("s", vec![post("a", "2024-01-01", 1)]));
        assert_eq!(item.scored_text(), "Series s Series overview");
    }

    #[test]
    fn test_blog_candidate_through_child_author() {
        let mut child = post("a", "2024-01-01", 1);
        child.authors = vec!["Barbara Liskov".into()];
        let item = ContentItem::Series(series("s", vec![child]));
        assert!(item.is_candidate("liskov"));
        assert_eq!(item.to_result(0.0).url, "/blog/series/s");
    }
}
