// src/matcher/mod.rs
// =============================================================================
// The Matcher trait and everything that implements it.
//
// Submodules:
// - normalize: builds the "host + path" string that pattern/regexp compare
// - hostname:  exact host equality
// - pattern:   shell-style glob over host + path
// - regexp:    regular expression search over host + path
// - combine:   and / or / not / any-of / all-of glue
//
// A matcher must be safe to share between threads. Every matcher here only
// holds configuration that is fixed at construction, so `Send + Sync` comes
// for free and no locking is ever needed.
//
// Rust concepts:
// - Traits: a shared interface that many types implement
// - Trait objects: Box<dyn Matcher> lets us store different matchers together
// - Newtypes: MatcherFn wraps a closure so it becomes a named Matcher
// =============================================================================

mod combine;
mod hostname;
mod normalize;
mod pattern;
mod regexp;

use percent_encoding::percent_decode_str;
use std::fmt;
use std::sync::Arc;
use url::Url;

pub use combine::{AllOf, And, AnyOf, MatcherExt, Not, Or};
pub use hostname::{match_hostname, HostnameMatcher};
pub use normalize::normalize_path;
pub use pattern::{match_pattern, PatternMatcher};
pub use regexp::{match_regexp, RegexpMatcher};

/// Decides whether a discovered URL should be queued.
///
/// `matches` is called just before a URL is queued. If it returns false,
/// the URL is dropped. It never fails: a matcher that cannot decide says no.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if the URL is in scope.
    fn matches(&self, url: &Url) -> bool;
}

// Forwarding impls so boxed, shared and borrowed matchers can be passed
// anywhere a Matcher is expected
impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, url: &Url) -> bool {
        (**self).matches(url)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn matches(&self, url: &Url) -> bool {
        (**self).matches(url)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn matches(&self, url: &Url) -> bool {
        (**self).matches(url)
    }
}

/// Adapts a plain function or closure into a [`Matcher`].
///
/// Useful for one-off rules that don't deserve their own type:
///
/// ```
/// use link_scope::{matcher_fn, Matcher};
/// let https_only = matcher_fn(|url| url.scheme() == "https");
/// assert!(https_only.matches(&url::Url::parse("https://example.com").unwrap()));
/// ```
#[derive(Clone, Copy)]
pub struct MatcherFn<F>(pub F);

impl<F> Matcher for MatcherFn<F>
where
    F: Fn(&Url) -> bool + Send + Sync,
{
    fn matches(&self, url: &Url) -> bool {
        (self.0)(url)
    }
}

// Closures can't implement Debug, so print a placeholder instead
impl<F> fmt::Debug for MatcherFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MatcherFn(..)")
    }
}

/// Wraps `f` in a [`MatcherFn`].
pub fn matcher_fn<F>(f: F) -> MatcherFn<F>
where
    F: Fn(&Url) -> bool + Send + Sync,
{
    MatcherFn(f)
}

// Host component as the matchers see it: host plus ":port" when the URL
// spells out a non-default port, or "" for URLs without a host
pub(crate) fn host_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

// The normalized subject compared by the pattern and regexp matchers.
// Scheme, query and fragment are left out on purpose. The path is
// percent-decoded so rules can spell spaces and non-ASCII characters as-is;
// invalid UTF-8 sequences become U+FFFD.
pub(crate) fn subject_of(url: &Url) -> String {
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    let mut subject = host_of(url);
    subject.push_str(&normalize_path(&path));
    subject
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `impl<M: Matcher + ?Sized> Matcher for Box<M>`?
//    - `?Sized` lets M be a trait object like `dyn Matcher`
//    - So a Box<dyn Matcher> is itself a Matcher and can be combined again
//
// 2. Why not implement Matcher for every closure directly?
//    - A blanket impl for all `Fn(&Url) -> bool` would overlap with the Box
//      impl (a Box of a closure is also a closure), and Rust rejects that
//    - The MatcherFn newtype sidesteps the overlap
//
// 3. What is `(self.0)(url)`?
//    - self.0 is the first (and only) field of the tuple struct
//    - The parentheses are needed to call a field that holds a function
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_matcher_fn_forwards_the_call() {
        let matcher = matcher_fn(|u: &Url| u.path().ends_with(".html"));
        assert!(matcher.matches(&url("https://example.com/index.html")));
        assert!(!matcher.matches(&url("https://example.com/logo.png")));
    }

    #[test]
    fn test_boxed_and_shared_matchers_forward() {
        let boxed: Box<dyn Matcher> = Box::new(match_hostname("example.com"));
        let shared: Arc<dyn Matcher> = Arc::new(match_hostname("example.com"));
        let u = url("https://example.com/");

        assert!(boxed.matches(&u));
        assert!(shared.matches(&u));
        assert!((&boxed).matches(&u));
    }

    #[test]
    fn test_host_of_keeps_explicit_port() {
        assert_eq!(host_of(&url("http://example.com:8080/a")), "example.com:8080");
        // url drops default ports while parsing
        assert_eq!(host_of(&url("http://example.com:80/a")), "example.com");
        assert_eq!(host_of(&url("file:///etc/hosts")), "");
    }

    #[test]
    fn test_subject_excludes_scheme_query_and_fragment() {
        assert_eq!(
            subject_of(&url("https://example.com/blog/post1?x=1#top")),
            "example.com/blog/post1"
        );
        assert_eq!(subject_of(&url("http://example.com")), "example.com/");
    }

    #[test]
    fn test_subject_path_is_percent_decoded() {
        assert_eq!(subject_of(&url("https://example.com/café")), "example.com/café");
        assert_eq!(subject_of(&url("https://example.com/my%20blog")), "example.com/my blog");
        // Hosts stay in their punycode form
        assert_eq!(subject_of(&url("https://bücher.de/")), "xn--bcher-kva.de/");
    }

    #[test]
    fn test_subject_of_opaque_path_gets_separator() {
        // "mailto:" URLs have no host and a path without a leading slash
        assert_eq!(subject_of(&url("mailto:someone@example.com")), "/someone@example.com");
    }

    #[test]
    fn test_matcher_fn_debug_placeholder() {
        let matcher = matcher_fn(|_: &Url| true);
        assert_eq!(format!("{:?}", matcher), "MatcherFn(..)");
    }
}
