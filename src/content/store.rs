//! Read-only content store.
//!
//! Loaded once from the static JSON definitions and never mutated. Every
//! accessor returns a freshly built view.

use std::{fs, io::ErrorKind, path::Path, ptr};

use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;

use super::error::ContentError;
use super::types::{
    Book, BlogData, ContentItem, LibraryData, Project, ProjectStatus, ProjectsData,
    ReadingStatus, SoloItem,
};
use crate::blog;
use crate::config::DataConfig;
use crate::log;
use crate::utils::{date::ContentDate, set::OrderedSet};

/// Immutable snapshot of every content collection.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    projects: ProjectsData,
    library: LibraryData,
    blog: BlogData,
}

impl ContentStore {
    /// Build a store from already-parsed collections.
    ///
    /// Fails on duplicate ids or posts without authors.
    pub fn new(
        projects: ProjectsData,
        library: LibraryData,
        blog: BlogData,
    ) -> Result<Self, ContentError> {
        let store = Self {
            projects,
            library,
            blog,
        };
        store.validate()?;
        Ok(store)
    }

    /// Load all collections from the configured data directory.
    ///
    /// A missing file yields an empty collection.
    pub fn load(config: &DataConfig) -> Result<Self, ContentError> {
        let projects: ProjectsData = load_collection(&config.projects_path())?;
        let library: LibraryData = load_collection(&config.library_path())?;
        let blog: BlogData = load_collection(&config.blog_path())?;

        log!(
            "load";
            "{} projects, {} books, {} blog items ({} posts)",
            projects.projects.len(),
            library.books.len(),
            blog.items.len(),
            blog::post_count(&blog.items)
        );

        Self::new(projects, library, blog)
    }

    fn validate(&self) -> Result<(), ContentError> {
        check_unique_ids("project", self.projects.projects.iter().map(|p| p.id.as_str()))?;
        check_unique_ids("book", self.library.books.iter().map(|b| b.id.as_str()))?;

        let mut blog_ids = FxHashSet::default();
        for item in &self.blog.items {
            if !blog_ids.insert(item.id()) {
                return Err(duplicate_id("blog item", item.id()));
            }
            match item {
                ContentItem::Solo(post) => validate_post(post)?,
                ContentItem::Series(series) => {
                    if series.posts.is_empty() {
                        log!("warn"; "series `{}` has no posts", series.id);
                    }
                    for post in &series.posts {
                        if !blog_ids.insert(post.id.as_str()) {
                            return Err(duplicate_id("blog item", &post.id));
                        }
                        validate_post(post)?;
                    }
                }
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Blog
    // ------------------------------------------------------------------------

    pub fn blog_items(&self) -> &[ContentItem] {
        &self.blog.items
    }

    pub fn blog_categories(&self) -> &[String] {
        &self.blog.categories
    }

    /// Items flagged `featured` or listed in the `featured` ids.
    pub fn featured_blog_items(&self) -> Vec<&ContentItem> {
        self.blog
            .items
            .iter()
            .filter(|item| {
                item.is_featured() || self.blog.featured.iter().any(|id| id == item.id())
            })
            .collect()
    }

    /// Top-level item by id; series parts are not looked up.
    pub fn blog_item_by_id(&self, id: &str) -> Option<&ContentItem> {
        self.blog.items.iter().find(|item| item.id() == id)
    }

    pub fn flatten_posts(&self) -> Vec<SoloItem> {
        blog::flatten_posts(&self.blog.items)
    }

    pub fn post_count(&self) -> usize {
        blog::post_count(&self.blog.items)
    }

    // ------------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------------

    /// Visible projects, in file order.
    pub fn projects(&self) -> Vec<&Project> {
        self.projects.projects.iter().filter(|p| p.visible).collect()
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.featured || self.projects.featured.contains(&p.id))
            .collect()
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.projects.iter().find(|p| p.id == id)
    }

    pub fn projects_by_category(&self, category: &str) -> Vec<&Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn projects_by_tag(&self, tag: &str) -> Vec<&Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }

    pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.status == status)
            .collect()
    }

    /// Visible projects meeting every given criterion, in file order.
    pub fn select_projects(
        &self,
        status: Option<ProjectStatus>,
        category: Option<&str>,
        tag: Option<&str>,
    ) -> Vec<&Project> {
        let mut selected = match status {
            Some(status) => self.projects_by_status(status),
            None => self.projects(),
        };
        if let Some(category) = category {
            let in_category = self.projects_by_category(category);
            selected.retain(|p| in_category.iter().any(|q| ptr::eq(*p, *q)));
        }
        if let Some(tag) = tag {
            let tagged = self.projects_by_tag(tag);
            selected.retain(|p| tagged.iter().any(|q| ptr::eq(*p, *q)));
        }
        selected
    }

    /// Declared categories from `projects.json`.
    pub fn project_categories(&self) -> &[String] {
        &self.projects.categories
    }

    pub fn all_project_tags(&self) -> Vec<String> {
        let mut tags = OrderedSet::new();
        for project in self.projects() {
            tags.extend(&project.tags);
        }
        tags.into_vec()
    }

    /// Newest projects by start date; undated projects sort last.
    pub fn recent_projects(&self, limit: usize) -> Vec<&Project> {
        let mut projects = self.projects();
        projects.sort_by(|a, b| {
            let a = ContentDate::parse(&a.start_date);
            let b = ContentDate::parse(&b.start_date);
            b.cmp(&a)
        });
        projects.truncate(limit);
        projects
    }

    // ------------------------------------------------------------------------
    // Library
    // ------------------------------------------------------------------------

    pub fn books(&self) -> &[Book] {
        &self.library.books
    }

    pub fn book_by_id(&self, id: &str) -> Option<&Book> {
        self.library.books.iter().find(|b| b.id == id)
    }

    /// Books listed in `currentlyReading`, in that order.
    pub fn currently_reading(&self) -> Vec<&Book> {
        self.library
            .currently_reading
            .iter()
            .filter_map(|id| self.book_by_id(id))
            .collect()
    }

    pub fn favorite_books(&self) -> Vec<&Book> {
        self.library.books.iter().filter(|b| b.favorite).collect()
    }

    pub fn books_by_status(&self, status: ReadingStatus) -> Vec<&Book> {
        self.library
            .books
            .iter()
            .filter(|b| b.reading_status == status)
            .collect()
    }

    pub fn all_genres(&self) -> Vec<String> {
        let mut genres = OrderedSet::new();
        for book in &self.library.books {
            genres.extend(&book.genre);
        }
        genres.into_vec()
    }
}

/// Read and decode one content file; a missing file is an empty collection.
fn load_collection<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ContentError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log!("warn"; "`{}` not found, collection left empty", path.display());
            return Ok(T::default());
        }
        Err(err) => return Err(ContentError::Io(path.to_path_buf(), err)),
    };
    serde_json::from_str(&content).map_err(|err| ContentError::Json(path.to_path_buf(), err))
}

fn validate_post(post: &SoloItem) -> Result<(), ContentError> {
    if post.authors.is_empty() {
        return Err(ContentError::Validation(format!(
            "post `{}` must have at least one author",
            post.id
        )));
    }
    if ContentDate::parse(&post.date).is_none() {
        log!("warn"; "post `{}` has unparseable date `{}`", post.id, post.date);
    }
    Ok(())
}

fn check_unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(duplicate_id(kind, id));
        }
    }
    Ok(())
}

fn duplicate_id(kind: &str, id: &str) -> ContentError {
    ContentError::Validation(format!("duplicate {kind} id `{id}`"))
}
