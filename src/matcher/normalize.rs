// src/matcher/normalize.rs
// =============================================================================
// Path normalization for the pattern and regexp matchers.
//
// Those matchers compare against `host + path`. Without a guaranteed "/"
// between the two, "example.com" + "blog" would become "example.comblog" and
// no single pattern could anchor on the path boundary.
// =============================================================================

use std::borrow::Cow;

/// Prepends `/` to a non-empty path that lacks one.
///
/// Empty paths and paths that already start with `/` come back unchanged,
/// so applying it twice gives the same result as applying it once.
///
/// ```
/// use link_scope::normalize_path;
/// assert_eq!(normalize_path("a"), "/a");
/// assert_eq!(normalize_path("/a"), "/a");
/// assert_eq!(normalize_path(""), "");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if !path.is_empty() && !path.starts_with('/') {
        Cow::Owned(format!("/{}", path))
    } else {
        Cow::Borrowed(path)
    }
}
