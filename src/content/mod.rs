//! Static portfolio content.
//!
//! # Data Files
//!
//! | File            | Collection                          |
//! |-----------------|-------------------------------------|
//! | `projects.json` | Projects, categories, featured ids  |
//! | `library.json`  | Books, currently-reading ids        |
//! | `blog.json`     | Blog posts and series               |
//!
//! Files are read once into a [`ContentStore`]; nothing is written back.

mod error;
mod store;
mod types;

pub use error::ContentError;
pub use store::ContentStore;
pub use types::{
    BlogData, Book, ContentItem, ItemKind, LibraryData, Project, ProjectStatus, ProjectsData,
    ReadingStatus, SeriesItem, SoloItem,
};
