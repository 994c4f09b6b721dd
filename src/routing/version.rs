//! Version tags and the immutable set they live in.

use std::collections::HashMap;
use std::fmt;

use crate::config::validation::{validate_version, ValidationError};
use crate::error::{RouterError, RouterResult};

/// A single front-end version prefix, e.g. `/react`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

impl VersionTag {
    /// Create a tag after checking its shape.
    pub fn parse(tag: impl Into<String>) -> RouterResult<Self> {
        let tag = tag.into();
        validate_version(&tag).map_err(RouterError::InvalidVersion)?;
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier without the leading slash (`react` for `/react`).
    pub fn name(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, non-empty, duplicate-free collection of version tags.
///
/// Order matters: selectors draw an index into it.
#[derive(Debug, Clone)]
pub struct VersionSet {
    tags: Vec<VersionTag>,
    index: HashMap<String, usize>,
}

impl VersionSet {
    /// Build a set from raw tag strings.
    pub fn new<I, S>(tags: I) -> RouterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            tags: Vec::new(),
            index: HashMap::new(),
        };
        for raw in tags {
            let tag = VersionTag::parse(raw)?;
            if set.index.contains_key(tag.as_str()) {
                // Duplicates would skew the uniform draw.
                return Err(RouterError::InvalidVersion(ValidationError::DuplicateVersion(tag.0)));
            }
            set.index.insert(tag.0.clone(), set.tags.len());
            set.tags.push(tag);
        }
        if set.tags.is_empty() {
            return Err(RouterError::EmptyVersionSet);
        }
        Ok(set)
    }

    /// Exact lookup of a candidate prefix such as `/react`.
    pub fn get(&self, prefix: &str) -> Option<&VersionTag> {
        self.index.get(prefix).map(|&i| &self.tags[i])
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.index.contains_key(prefix)
    }

    pub fn at(&self, index: usize) -> Option<&VersionTag> {
        self.tags.get(index)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionTag> {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_VERSIONS;

    #[test]
    fn test_default_versions_build() {
        let set = VersionSet::new(DEFAULT_VERSIONS).unwrap();
        assert_eq!(set.len(), 12);
        assert_eq!(set.at(2).unwrap().as_str(), "/react");
        assert_eq!(set.get("/leptos").unwrap().name(), "leptos");
        assert!(set.get("/vuetify").is_none());
        assert!(!set.contains("/"));
    }

    #[test]
    fn test_order_is_preserved() {
        let set = VersionSet::new(["/vue", "/lit", "/react"]).unwrap();
        let names: Vec<_> = set.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["vue", "lit", "react"]);
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let err = VersionSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, RouterError::EmptyVersionSet));
    }

    #[test]
    fn test_duplicates_are_rejected() {
        let err = VersionSet::new(["/vue", "/vue"]).unwrap_err();
        assert!(matches!(
            err,
            RouterError::InvalidVersion(ValidationError::DuplicateVersion(v)) if v == "/vue"
        ));
    }

    #[test]
    fn test_malformed_tag_is_rejected() {
        assert!(matches!(
            VersionTag::parse("react"),
            Err(RouterError::InvalidVersion(ValidationError::MissingLeadingSlash(_)))
        ));
        assert!(matches!(
            VersionTag::parse("/react/"),
            Err(RouterError::InvalidVersion(ValidationError::NestedSegment(_)))
        ));
    }
}
