//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [data] Section Defaults
// ============================================================================

pub mod data {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "data".into()
    }

    pub fn projects() -> PathBuf {
        "projects.json".into()
    }

    pub fn library() -> PathBuf {
        "library.json".into()
    }

    pub fn blog() -> PathBuf {
        "blog.json".into()
    }
}

// ============================================================================
// [search] Section Defaults
// ============================================================================

pub mod search {
    use crate::search::Collection;

    pub fn collections() -> Vec<Collection> {
        Collection::ALL.to_vec()
    }

    pub fn limit() -> Option<usize> {
        None
    }
}
