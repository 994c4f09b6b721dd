//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check version tag shape (`/` + lowercase identifier)
//! - Detect duplicate tags
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `routing.versions` is empty.
    NoVersions,
    /// Tag does not start with `/`.
    MissingLeadingSlash(String),
    /// Tag has no identifier after the `/`.
    EmptyIdentifier(String),
    /// Tag spans more than one path segment.
    NestedSegment(String),
    /// Identifier contains characters outside `[a-z0-9-]`.
    InvalidCharacters(String),
    /// The same tag appears more than once.
    DuplicateVersion(String),
    /// `routing.index_document` is empty or contains `/`.
    InvalidIndexDocument(String),
    /// `observability.log_level` is not a known level.
    UnknownLogLevel(String),
    /// `observability.metrics_namespace` is empty while metrics are on.
    EmptyMetricsNamespace,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoVersions => write!(f, "at least one version is required"),
            ValidationError::MissingLeadingSlash(v) => write!(f, "version {:?} must start with '/'", v),
            ValidationError::EmptyIdentifier(v) => write!(f, "version {:?} has no identifier", v),
            ValidationError::NestedSegment(v) => write!(f, "version {:?} must be a single path segment", v),
            ValidationError::InvalidCharacters(v) => {
                write!(f, "version {:?} may only contain lowercase letters, digits and '-'", v)
            }
            ValidationError::DuplicateVersion(v) => write!(f, "version {:?} is listed more than once", v),
            ValidationError::InvalidIndexDocument(d) => write!(f, "index document {:?} must be a file name", d),
            ValidationError::UnknownLogLevel(l) => write!(f, "unknown log level {:?}", l),
            ValidationError::EmptyMetricsNamespace => write!(f, "metrics namespace must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a single version tag, returning the first problem found.
pub fn validate_version(tag: &str) -> Result<(), ValidationError> {
    let Some(ident) = tag.strip_prefix('/') else {
        return Err(ValidationError::MissingLeadingSlash(tag.to_string()));
    };
    if ident.is_empty() {
        return Err(ValidationError::EmptyIdentifier(tag.to_string()));
    }
    if ident.contains('/') {
        return Err(ValidationError::NestedSegment(tag.to_string()));
    }
    let valid = ident
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid {
        return Err(ValidationError::InvalidCharacters(tag.to_string()));
    }
    Ok(())
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routing.versions.is_empty() {
        errors.push(ValidationError::NoVersions);
    }

    let mut seen = HashSet::new();
    for tag in &config.routing.versions {
        if let Err(e) = validate_version(tag) {
            errors.push(e);
        } else if !seen.insert(tag.as_str()) {
            errors.push(ValidationError::DuplicateVersion(tag.clone()));
        }
    }

    if let Some(doc) = &config.routing.index_document {
        if doc.is_empty() || doc.contains('/') {
            errors.push(ValidationError::InvalidIndexDocument(doc.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled && config.observability.metrics_namespace.trim().is_empty() {
        errors.push(ValidationError::EmptyMetricsNamespace);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
