//! Content loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the static content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Content file `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Content validation error: {0}")]
    Validation(String),
}
