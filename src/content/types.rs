//! Content record types.
//!
//! These mirror the static JSON definitions under the data directory
//! (`projects.json`, `library.json`, `blog.json`). Field names are camelCase
//! on disk.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Blog Content
// ============================================================================

/// A blog entry: either a standalone post or an ordered series of posts.
///
/// Discriminated by the `type` field (`"solo"` or `"series"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Solo(SoloItem),
    Series(SeriesItem),
}

/// Discriminant of a [`ContentItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Solo,
    Series,
}

impl ItemKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Series => "series",
        }
    }
}

/// A single, non-composite blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoloItem {
    pub id: String,

    pub title: String,

    /// URL slug, e.g. "hello-world"
    pub slug: String,

    pub excerpt: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Display date (`YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,

    /// Reading time in minutes
    #[serde(default)]
    pub reading_time: u32,

    #[serde(default)]
    pub featured: bool,

    /// At least one author
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Link to the post on an external blog (e.g. Medium)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

/// An ordered collection of posts sharing a narrative arc.
///
/// Position in `posts` is the canonical "Part N" ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItem {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub excerpt: String,

    #[serde(default)]
    pub category: String,

    /// Series-level tags; children contribute their own on aggregation
    #[serde(default)]
    pub tags: Vec<String>,

    /// Fallback date, used only when no child date parses
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub posts: Vec<SoloItem>,
}

impl ContentItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Solo(post) => &post.id,
            Self::Series(series) => &series.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Solo(post) => &post.title,
            Self::Series(series) => &series.title,
        }
    }

    pub fn excerpt(&self) -> &str {
        match self {
            Self::Solo(post) => &post.excerpt,
            Self::Series(series) => &series.excerpt,
        }
    }

    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Solo(_) => ItemKind::Solo,
            Self::Series(_) => ItemKind::Series,
        }
    }

    pub fn is_featured(&self) -> bool {
        match self {
            Self::Solo(post) => post.featured,
            Self::Series(series) => series.featured,
        }
    }

    /// Site path of the item's page.
    pub fn url(&self) -> String {
        match self {
            Self::Solo(post) => format!("/blog/{}", post.slug),
            Self::Series(series) => format!("/blog/series/{}", series.id),
        }
    }
}

/// `blog.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogData {
    #[serde(default)]
    pub categories: Vec<String>,

    /// Ids of featured items, in display order
    #[serde(default)]
    pub featured: Vec<String>,

    #[serde(default)]
    pub items: Vec<ContentItem>,
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
    Archived,
}

impl ProjectStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planning => "planning",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "planning" => Ok(Self::Planning),
            "archived" => Ok(Self::Archived),
            other => Err(format!(
                "unknown project status `{other}` (expected completed, in-progress, planning or archived)"
            )),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    pub status: ProjectStatus,

    #[serde(default)]
    pub start_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default)]
    pub featured: bool,

    /// Hidden projects are kept in the data but never listed or searched
    #[serde(default = "visible_default")]
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

fn visible_default() -> bool {
    true
}

/// `projects.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsData {
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub featured: Vec<String>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

// ============================================================================
// Library
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    WantToRead,
    CurrentlyReading,
    Read,
    DidNotFinish,
}

impl ReadingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WantToRead => "want-to-read",
            Self::CurrentlyReading => "currently-reading",
            Self::Read => "read",
            Self::DidNotFinish => "did-not-finish",
        }
    }
}

impl FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "want-to-read" => Ok(Self::WantToRead),
            "currently-reading" => Ok(Self::CurrentlyReading),
            "read" => Ok(Self::Read),
            "did-not-finish" => Ok(Self::DidNotFinish),
            other => Err(format!(
                "unknown reading status `{other}` (expected want-to-read, currently-reading, read or did-not-finish)"
            )),
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,

    pub title: String,

    pub author: String,

    #[serde(default)]
    pub genre: Vec<String>,

    /// 1-5 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,

    pub reading_status: ReadingStatus,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

/// `library.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryData {
    /// Ids of books currently being read, in display order
    #[serde(default)]
    pub currently_reading: Vec<String>,

    #[serde(default)]
    pub favorite_genres: Vec<String>,

    #[serde(default)]
    pub books: Vec<Book>,
}
