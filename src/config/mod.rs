//! Configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[data]`    | Location of the static content files           |
//! | `[search]`  | Default collections and result limit           |
//!
//! # Example
//!
//! ```toml
//! [data]
//! dir = "data"
//!
//! [search]
//! collections = ["projects", "books", "blog"]
//! limit = 20
//! ```

mod data;
pub mod defaults;
mod error;
mod search;

pub use data::DataConfig;
pub use error::ConfigError;
pub use search::SearchConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Content file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

impl FolioConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let config: FolioConfig = toml::from_str(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Update configuration with CLI arguments.
    ///
    /// Paths are resolved against the root and normalized to absolute form.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let root = Self::normalize_path(&root);

        Self::update_option(&mut self.data.dir, cli.data.as_ref());
        self.data.dir = Self::normalize_path(&root.join(&self.data.dir));

        if let Commands::Search {
            collections, limit, ..
        } = &cli.command
        {
            if !collections.is_empty() {
                self.search.collections = collections.clone();
            }
            if limit.is_some() {
                self.search.limit = *limit;
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before the content store is loaded
    pub fn validate(&self) -> Result<()> {
        if !self.data.dir.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[data.dir] `{}` is not a directory",
                self.data.dir.display()
            )));
        }

        if self.search.collections.is_empty() {
            bail!(ConfigError::Validation(
                "[search.collections] must have at least one element".into()
            ));
        }

        if self.search.limit == Some(0) {
            bail!(ConfigError::Validation(
                "[search.limit] must be greater than zero".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Collection;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = FolioConfig::from_str(
            r#"
            [data]
            dir = "content"

            [search]
            limit = 10
        "#,
        )
        .unwrap();

        assert_eq!(config.data.dir, PathBuf::from("content"));
        assert_eq!(config.search.limit, Some(10));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = FolioConfig::from_str("[data\ndir = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = FolioConfig::from_str(
            r#"
            [theme]
            default = "dark"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = FolioConfig::from_path(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_from_path_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[search]\nlimit = \"ten\"\n").unwrap();

        let err = FolioConfig::from_path(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(p, _)) if p == &path
        ));
        assert!(err.to_string().contains("folio.toml"));
    }

    #[test]
    fn test_default() {
        let config = FolioConfig::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.search.collections, Collection::ALL.to_vec());
    }

    #[test]
    fn test_update_with_cli_resolves_paths_against_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        let root = dir.path().to_str().unwrap();

        let mut config = FolioConfig::default();
        config.update_with_cli(&cli(&["folio", "--root", root, "tags"]));

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.data.dir, root.join("data"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_with_cli_data_override() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        let root = dir.path().to_str().unwrap();

        let mut config = FolioConfig::default();
        config.update_with_cli(&cli(&["folio", "-r", root, "-d", "content", "tags"]));

        assert_eq!(config.data.dir, dir.path().canonicalize().unwrap().join("content"));
    }

    #[test]
    fn test_update_with_cli_search_overrides() {
        let mut config = FolioConfig::default();
        config.update_with_cli(&cli(&[
            "folio", "search", "rust", "--in", "books", "--limit", "2",
        ]));

        assert_eq!(config.search.collections, vec![Collection::Books]);
        assert_eq!(config.search.limit, Some(2));
    }

    #[test]
    fn test_update_with_cli_keeps_config_collections_without_flag() {
        let mut config = FolioConfig::from_str(
            r#"
            [search]
            collections = ["projects"]
        "#,
        )
        .unwrap();
        config.update_with_cli(&cli(&["folio", "search", "rust"]));

        assert_eq!(config.search.collections, vec![Collection::Projects]);
    }

    #[test]
    fn test_validate_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();

        let mut config = FolioConfig::default();
        config.update_with_cli(&cli(&["folio", "-r", root, "tags"]));

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[data.dir]"));
    }

    #[test]
    fn test_validate_zero_limit() {
        let dir = TempDir::new().unwrap();
        let mut config = FolioConfig::default();
        config.data.dir = dir.path().to_path_buf();
        config.search.limit = Some(0);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_collections() {
        let dir = TempDir::new().unwrap();
        let mut config = FolioConfig::default();
        config.data.dir = dir.path().to_path_buf();
        config.search.collections.clear();

        assert!(config.validate().is_err());
    }
}
