//! Errors raised while reading `folio.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// TOML error for a file on disk.
    #[error("cannot parse config `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    /// TOML error for an in-memory string.
    #[error("cannot parse config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_names_file_and_keeps_source() {
        let toml_err = toml::from_str::<toml::Table>("[data\ndir = 1").unwrap_err();
        let err = ConfigError::Parse(PathBuf::from("site/folio.toml"), toml_err);

        assert_eq!(err.to_string(), "cannot parse config `site/folio.toml`");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_validation_message() {
        let err = ConfigError::Validation("[search.limit] must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "invalid config: [search.limit] must be greater than zero"
        );
    }
}
