// src/matcher/pattern.rs
// =============================================================================
// Shell-style glob matching over "host + path".
//
// Syntax (via the `glob` crate):
//   *      any run of characters, including none, crossing "/" too
//   ?      exactly one character
//   [abc]  one character from the set, [!abc] one character not in it
//
// The pattern has to match the WHOLE subject, so "example.com/blog/*" accepts
// "example.com/blog/post1" but not "www.example.com/blog/post1".
//
// Scheme and query are never part of the subject: a rule like
// "example.com/blog/*" shouldn't care about http vs https, or about the
// arbitrary order of query parameters.
// =============================================================================

use super::{subject_of, Matcher};
use glob::{MatchOptions, Pattern};
use url::Url;

// `*` must cross "/" and dots are not special: we are matching URLs, not
// file names
const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Matches URLs whose `host + path` fits a glob pattern.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Pattern,
}

impl PatternMatcher {
    /// The compiled pattern: the input with `**` runs collapsed, or its
    /// escaped form (`[` becomes `[[]`) when the glob syntax rejected it.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Matcher for PatternMatcher {
    fn matches(&self, url: &Url) -> bool {
        self.pattern.matches_with(&subject_of(url), OPTIONS)
    }
}

/// Returns a matcher that accepts URLs whose `host + path` matches `pattern`.
///
/// This never fails. A pattern the glob syntax rejects (an unclosed `[`, for
/// example) is matched as plain text instead.
pub fn match_pattern(pattern: &str) -> PatternMatcher {
    let collapsed = collapse_stars(pattern);

    let compiled = match Pattern::new(&collapsed) {
        Ok(compiled) => compiled,
        Err(err) => {
            tracing::debug!(pattern, error = %err, "glob rejected, matching literally");
            literal(pattern)
        }
    };

    tracing::debug!(pattern = compiled.as_str(), "built pattern matcher");
    PatternMatcher { pattern: compiled }
}

// The glob crate reserves "**" for whole path components and rejects it
// elsewhere. Since our "*" already crosses "/", any run of stars means the
// same thing as one star.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut prev_star = false;
    for c in pattern.chars() {
        if c == '*' && prev_star {
            continue;
        }
        prev_star = c == '*';
        out.push(c);
    }
    out
}

fn literal(pattern: &str) -> Pattern {
    // An escaped pattern only contains literals and [x] classes, which
    // always compile; the fallback is never reached in practice
    Pattern::new(&Pattern::escape(pattern)).unwrap_or_default()
}
