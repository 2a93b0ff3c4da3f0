//! `[search]` section configuration.

use super::defaults;
use crate::search::Collection;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[search]` section in folio.toml - defaults for `folio search`.
///
/// # Example
/// ```toml
/// [search]
/// collections = ["projects", "blog"]
/// limit = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Collections searched when `--in` is not given.
    #[serde(default = "defaults::search::collections")]
    #[educe(Default = defaults::search::collections())]
    pub collections: Vec<Collection>,

    /// Maximum number of results; unset means all.
    #[serde(default = "defaults::search::limit")]
    #[educe(Default = defaults::search::limit())]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::super::FolioConfig;
    use crate::search::Collection;

    #[test]
    fn test_search_config_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();

        assert_eq!(config.search.collections, Collection::ALL.to_vec());
        assert_eq!(config.search.limit, None);
    }

    #[test]
    fn test_search_config_custom() {
        let config: FolioConfig = toml::from_str(
            r#"
            [search]
            collections = ["books"]
            limit = 5
        "#,
        )
        .unwrap();

        assert_eq!(config.search.collections, vec![Collection::Books]);
        assert_eq!(config.search.limit, Some(5));
    }

    #[test]
    fn test_search_config_unknown_collection_rejected() {
        let result: Result<FolioConfig, _> = toml::from_str(
            r#"
            [search]
            collections = ["music"]
        "#,
        );
        assert!(result.is_err());
    }
}
