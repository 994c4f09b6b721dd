//! URI version routing.
//!
//! # Responsibilities
//! - Decide whether a uri already targets a known version
//! - Otherwise draw a version and prepend it to the uri
//! - Optionally expand bare version roots to an index document
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Randomness is injected per call through a VersionSelector
//! - Explicit error for uris that do not start with '/'

use std::sync::Arc;

use crate::config::RoutingConfig;
use crate::error::{RouterError, RouterResult};
use crate::routing::matcher::candidate_prefix;
use crate::routing::version::{VersionSet, VersionTag};
use crate::selection::VersionSelector;

/// Outcome of routing a single uri.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The first segment already names a version.
    Matched { version: VersionTag, uri: String },
    /// No version in the path; `version` was drawn and prepended.
    Rewritten { version: VersionTag, uri: String },
}

impl RouteDecision {
    pub fn version(&self) -> &VersionTag {
        match self {
            RouteDecision::Matched { version, .. } | RouteDecision::Rewritten { version, .. } => version,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            RouteDecision::Matched { uri, .. } | RouteDecision::Rewritten { uri, .. } => uri,
        }
    }

    pub fn into_uri(self) -> String {
        match self {
            RouteDecision::Matched { uri, .. } | RouteDecision::Rewritten { uri, .. } => uri,
        }
    }

    pub fn is_rewrite(&self) -> bool {
        matches!(self, RouteDecision::Rewritten { .. })
    }
}

/// Routes request uris onto front-end versions.
#[derive(Debug, Clone)]
pub struct VersionRouter {
    versions: Arc<VersionSet>,
    index_document: Option<String>,
}

impl VersionRouter {
    pub fn new(versions: VersionSet) -> Self {
        Self {
            versions: Arc::new(versions),
            index_document: None,
        }
    }

    /// Build from configuration.
    pub fn from_config(config: &RoutingConfig) -> RouterResult<Self> {
        let versions = VersionSet::new(config.versions.iter().cloned())?;
        Ok(Self::new(versions).with_index_document(config.index_document.clone()))
    }

    /// Expand `/tag` and `/tag/` to `/tag/<document>`.
    pub fn with_index_document(mut self, document: Option<String>) -> Self {
        self.index_document = document;
        self
    }

    pub fn versions(&self) -> &VersionSet {
        &self.versions
    }

    /// Route `uri`, drawing from `selector` only when no version matches.
    ///
    /// Without an index document, a matched uri is returned unchanged and a
    /// rewritten uri is exactly `tag + uri`.
    pub fn route(&self, uri: &str, selector: &dyn VersionSelector) -> RouterResult<RouteDecision> {
        let prefix = candidate_prefix(uri).ok_or_else(|| RouterError::InvalidUri(uri.to_string()))?;

        let decision = match self.versions.get(prefix) {
            Some(version) => RouteDecision::Matched {
                version: version.clone(),
                uri: uri.to_string(),
            },
            None => {
                let version = selector
                    .select(self.versions.len())
                    .and_then(|i| self.versions.at(i))
                    .ok_or(RouterError::EmptyVersionSet)?
                    .clone();
                let uri = format!("{}{}", version, uri);
                RouteDecision::Rewritten { version, uri }
            }
        };

        Ok(self.expand_index(decision))
    }

    fn expand_index(&self, decision: RouteDecision) -> RouteDecision {
        let Some(document) = &self.index_document else {
            return decision;
        };

        let root = decision.version().as_str();
        let rest = &decision.uri()[root.len()..];
        if rest.is_empty() || rest == "/" {
            let uri = format!("{}/{}", root, document);
            return match decision {
                RouteDecision::Matched { version, .. } => RouteDecision::Matched { version, uri },
                RouteDecision::Rewritten { version, .. } => RouteDecision::Rewritten { version, uri },
            };
        }
        decision
    }
}
