//! Error definitions for the edge handler.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::config::validation::ValidationError;

/// Errors surfaced to the hosting platform.
///
/// None of these occur for a well-formed request; each one indicates the
/// platform handed us something outside the invocation contract, or the
/// function was deployed with a broken configuration.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The event did not deserialize into the expected shape
    /// (for example a missing or non-string `uri`).
    #[error("Malformed CloudFront event: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    /// `Records` was present but empty.
    #[error("CloudFront event contains no records")]
    MissingRecord,

    /// The request URI does not begin with `/`.
    #[error("Request URI must begin with '/': {0:?}")]
    InvalidUri(String),

    /// A version tag is malformed or repeated.
    #[error("Invalid version tag: {0}")]
    InvalidVersion(ValidationError),

    /// The router was constructed without any version tags.
    #[error("Version set is empty")]
    EmptyVersionSet,

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RouterError {
    /// Short label used for the `kind` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            RouterError::MalformedEvent(_) => "malformed_event",
            RouterError::MissingRecord => "missing_record",
            RouterError::InvalidUri(_) => "invalid_uri",
            RouterError::InvalidVersion(_) => "invalid_version",
            RouterError::EmptyVersionSet => "empty_version_set",
            RouterError::Config(_) => "config",
        }
    }
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
