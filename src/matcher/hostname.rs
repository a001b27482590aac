// src/matcher/hostname.rs
// =============================================================================
// Exact hostname matching - the classic "stay on this site" filter.
//
// No case folding, no port stripping, no suffix matching: "example.com" does
// not match "www.example.com" or "example.com:8080". Anything fuzzier belongs
// in a pattern or regexp matcher.
// =============================================================================

use super::{host_of, Matcher};
use url::Url;

/// Matches URLs whose host is exactly the configured string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameMatcher {
    host: String,
}

impl HostnameMatcher {
    /// The host this matcher accepts.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Matcher for HostnameMatcher {
    fn matches(&self, url: &Url) -> bool {
        host_of(url) == self.host
    }
}

/// Returns a matcher that accepts URLs whose host equals `host`.
///
/// An empty `host` only accepts URLs without a host (e.g. `file:///x`).
pub fn match_hostname(host: impl Into<String>) -> HostnameMatcher {
    let host = host.into();
    tracing::debug!(%host, "built hostname matcher");
    HostnameMatcher { host }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_exact_host_matches() {
        let matcher = match_hostname("example.com");
        assert!(matcher.matches(&url("https://example.com/")));
        assert!(matcher.matches(&url("http://example.com/any/path?q=1")));
    }

    #[test]
    fn test_other_hosts_do_not_match() {
        let matcher = match_hostname("example.com");
        assert!(!matcher.matches(&url("https://other.com/")));
        assert!(!matcher.matches(&url("https://www.example.com/")));
        assert!(!matcher.matches(&url("https://example.com.evil.net/")));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        // url lowercases hosts of http(s) URLs, so the configured value has
        // to be lowercase too
        let matcher = match_hostname("Example.com");
        assert!(!matcher.matches(&url("https://example.com/")));
    }

    #[test]
    fn test_port_is_part_of_the_host() {
        let plain = match_hostname("example.com");
        let with_port = match_hostname("example.com:8080");
        let u = url("http://example.com:8080/");

        assert!(!plain.matches(&u));
        assert!(with_port.matches(&u));
    }

    #[test]
    fn test_empty_host_only_matches_hostless_urls() {
        let matcher = match_hostname("");
        assert!(matcher.matches(&url("file:///etc/hosts")));
        assert!(matcher.matches(&url("mailto:someone@example.com")));
        assert!(!matcher.matches(&url("https://example.com/")));
    }

    #[test]
    fn test_internationalized_hosts_are_punycode() {
        let u = url("https://bücher.de/");
        assert!(!match_hostname("bücher.de").matches(&u));
        assert!(match_hostname("xn--bcher-kva.de").matches(&u));
    }

    #[test]
    fn test_host_accessor() {
        assert_eq!(match_hostname("docs.rs").host(), "docs.rs");
    }
}
