//! Path segment matching.
//!
//! # Responsibilities
//! - Extract the first path segment of a request uri
//! - Form the candidate prefix `"/" + segment`
//!
//! # Design Decisions
//! - Case-sensitive, byte-exact comparison
//! - Empty first segment (`/`, `//foo`) yields the bare `/` candidate
//! - Borrowed slices only; no allocation in the hot path

/// Substring between the leading `/` and the next `/` (or end of string).
///
/// Returns `None` when `path` does not begin with `/`.
pub fn first_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/')?;
    Some(match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Candidate version prefix for `path`: `/` followed by the first segment.
///
/// `"/react/x"` → `"/react"`, `"/"` → `"/"`, `"//foo"` → `"/"`.
pub fn candidate_prefix(path: &str) -> Option<&str> {
    first_segment(path).map(|segment| &path[..segment.len() + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/react/x"), Some("react"));
        assert_eq!(first_segment("/react"), Some("react"));
        assert_eq!(first_segment("/react/"), Some("react"));
        assert_eq!(first_segment("/"), Some(""));
        assert_eq!(first_segment("//foo"), Some(""));
        assert_eq!(first_segment(""), None);
        assert_eq!(first_segment("react"), None);
    }

    #[test]
    fn test_candidate_prefix() {
        assert_eq!(candidate_prefix("/vue/songs/42"), Some("/vue"));
        assert_eq!(candidate_prefix("/vuetify/x"), Some("/vuetify"));
        assert_eq!(candidate_prefix("/"), Some("/"));
        assert_eq!(candidate_prefix("//foo"), Some("/"));
        assert_eq!(candidate_prefix("/index.html"), Some("/index.html"));
    }

    #[test]
    fn test_multibyte_segment() {
        assert_eq!(candidate_prefix("/música/x"), Some("/música"));
    }
}
