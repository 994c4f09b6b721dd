//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load the file if it exists, otherwise fall back to the compiled-in defaults.
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &Path) -> Result<RouterConfig, ConfigError> {
    if path.is_file() {
        load_config(path)
    } else {
        Ok(RouterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [routing]
            versions = ["/react", "/vue"]
            index_document = "index.html"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.routing.versions, vec!["/react", "/vue"]);
        assert_eq!(config.routing.index_document.as_deref(), Some("index.html"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = parse_config("[routing\nversions = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_errors_are_reported() {
        let err = parse_config("[routing]\nversions = []").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors, vec![ValidationError::NoVersions]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = parse_config("[routing]\nversions = [\"react\", \"/Vue\"]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: version \"react\" must start with '/', \
             version \"/Vue\" may only contain lowercase letters, digits and '-'"
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(&dir.path().join("router.toml")).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
