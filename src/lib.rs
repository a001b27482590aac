// src/lib.rs
// =============================================================================
// link-scope decides which discovered links a crawler should follow.
//
// The crawler calls a matcher once per discovered URL, right before it would
// enqueue it, and only looks at the yes/no answer:
//   true  = in scope, schedule a fetch
//   false = out of scope, drop it
//
// Modules:
// - matcher: the Matcher trait, the built-in strategies (hostname, glob
//            pattern, regexp) and the boolean combinators
// - rules:   scope rules loaded from JSON or the command line, compiled into
//            a single Scope matcher
// - error:   error types returned when building matchers and scopes
//
// Example:
//   use link_scope::{match_hostname, match_pattern, Matcher, MatcherExt};
//   let scope = match_hostname("example.com").or(match_pattern("docs.rs/*"));
//   let url = url::Url::parse("https://example.com/about").unwrap();
//   assert!(scope.matches(&url));
// =============================================================================

pub mod error;
pub mod matcher;
pub mod rules;

// Re-export the public API so users can write `link_scope::match_hostname`
pub use error::{MatcherError, RulesError};
pub use matcher::{
    match_hostname, match_pattern, match_regexp, matcher_fn, normalize_path, AllOf, And,
    AnyOf, HostnameMatcher, Matcher, MatcherExt, MatcherFn, Not, Or, PatternMatcher,
    RegexpMatcher,
};
pub use rules::{Rule, Scope, ScopeRules};
