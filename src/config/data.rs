//! `[data]` section configuration.
//!
//! Locates the static content files the store is loaded from.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[data]` section in folio.toml - content file locations.
///
/// File names are relative to `dir`.
///
/// # Example
/// ```toml
/// [data]
/// dir = "content"
/// blog = "posts.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding the content files (relative to the root).
    #[serde(default = "defaults::data::dir")]
    #[educe(Default = defaults::data::dir())]
    pub dir: PathBuf,

    #[serde(default = "defaults::data::projects")]
    #[educe(Default = defaults::data::projects())]
    pub projects: PathBuf,

    #[serde(default = "defaults::data::library")]
    #[educe(Default = defaults::data::library())]
    pub library: PathBuf,

    #[serde(default = "defaults::data::blog")]
    #[educe(Default = defaults::data::blog())]
    pub blog: PathBuf,
}

impl DataConfig {
    pub fn projects_path(&self) -> PathBuf {
        self.dir.join(&self.projects)
    }

    pub fn library_path(&self) -> PathBuf {
        self.dir.join(&self.library)
    }

    pub fn blog_path(&self) -> PathBuf {
        self.dir.join(&self.blog)
    }
}
