// src/matcher/regexp.rs
// =============================================================================
// Regular expression matching over "host + path".
//
// Two differences from the glob matcher:
// - The expression is compiled up front, and a bad expression is an error
//   right away. It never reaches the crawl loop.
// - It SEARCHES the subject instead of matching all of it: "blog" accepts
//   "example.com/my-blog-page". Use ^ and $ to anchor.
//
// Rust concepts:
// - Result<T, E>: the constructor can fail, so it returns a Result
// - map_err: turns the regex crate's error into our own error type
// =============================================================================

use super::{subject_of, Matcher};
use crate::error::MatcherError;
use regex::Regex;
use url::Url;

/// Matches URLs whose `host + path` contains a match for a regular expression.
#[derive(Debug, Clone)]
pub struct RegexpMatcher {
    regex: Regex,
}

impl RegexpMatcher {
    /// The source of the compiled expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexpMatcher {
    fn matches(&self, url: &Url) -> bool {
        self.regex.is_match(&subject_of(url))
    }
}

/// Compiles `expr` and returns a matcher that searches `host + path` with it.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidRegexp`] if `expr` does not compile.
///
/// ```
/// use link_scope::match_regexp;
/// assert!(match_regexp(r"^example\.com/blog/").is_ok());
/// assert!(match_regexp("(unclosed").is_err());
/// ```
pub fn match_regexp(expr: &str) -> Result<RegexpMatcher, MatcherError> {
    let regex = Regex::new(expr).map_err(|source| MatcherError::InvalidRegexp {
        expr: expr.to_string(),
        source,
    })?;

    tracing::debug!(expr, "built regexp matcher");
    Ok(RegexpMatcher { regex })
}
