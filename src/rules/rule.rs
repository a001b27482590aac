// src/rules/rule.rs
// =============================================================================
// A single scope rule.
//
// In JSON each rule is a one-key object naming the strategy:
//   { "hostname": "example.com" }
//   { "pattern": "example.com/blog/*" }
//   { "regexp": "^example\\.com/(blog|news)/" }
//
// On the command line the same rule is written "kind:value":
//   hostname:example.com   pattern:example.com/blog/*   regexp:\.pdf$
// =============================================================================

use crate::error::{MatcherError, RulesError};
use crate::matcher::{match_hostname, match_pattern, match_regexp, Matcher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Exact host equality
    Hostname(String),
    /// Glob over host + path
    Pattern(String),
    /// Regular expression searched in host + path
    Regexp(String),
}

impl Rule {
    /// Builds the matcher for this rule.
    ///
    /// Only `Regexp` rules can fail, when the expression doesn't compile.
    pub fn build(&self) -> Result<Box<dyn Matcher>, MatcherError> {
        let matcher: Box<dyn Matcher> = match self {
            Rule::Hostname(host) => Box::new(match_hostname(host.as_str())),
            Rule::Pattern(pattern) => Box::new(match_pattern(pattern)),
            Rule::Regexp(expr) => Box::new(match_regexp(expr)?),
        };
        Ok(matcher)
    }

    fn kind(&self) -> &'static str {
        match self {
            Rule::Hostname(_) => "hostname",
            Rule::Pattern(_) => "pattern",
            Rule::Regexp(_) => "regexp",
        }
    }

    fn value(&self) -> &str {
        match self {
            Rule::Hostname(v) | Rule::Pattern(v) | Rule::Regexp(v) => v,
        }
    }
}

// Splits on the FIRST colon only, so "hostname:example.com:8080" keeps its port
impl FromStr for Rule {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| RulesError::InvalidRule(s.to_string()))?;

        let value = value.to_string();
        match kind {
            "hostname" | "host" => Ok(Rule::Hostname(value)),
            "pattern" | "glob" => Ok(Rule::Pattern(value)),
            "regexp" | "regex" => Ok(Rule::Regexp(value)),
            _ => Err(RulesError::InvalidRule(s.to_string())),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_parse_rule_strings() {
        assert_eq!(
            "hostname:example.com".parse::<Rule>().unwrap(),
            Rule::Hostname("example.com".to_string())
        );
        assert_eq!(
            "pattern:example.com/blog/*".parse::<Rule>().unwrap(),
            Rule::Pattern("example.com/blog/*".to_string())
        );
        assert_eq!(
            r"regexp:\.pdf$".parse::<Rule>().unwrap(),
            Rule::Regexp(r"\.pdf$".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_everything_after_first_colon() {
        assert_eq!(
            "host:example.com:8080".parse::<Rule>().unwrap(),
            Rule::Hostname("example.com:8080".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_rules() {
        for input in ["example.com", "domain:example.com", ""] {
            match input.parse::<Rule>() {
                Err(RulesError::InvalidRule(got)) => assert_eq!(got, input),
                other => panic!("Expected InvalidRule for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let rule = Rule::Pattern("*.example.com/*".to_string());
        assert_eq!(rule.to_string(), "pattern:*.example.com/*");
        assert_eq!(rule.to_string().parse::<Rule>().unwrap(), rule);
    }

    #[test]
    fn test_json_shape() {
        let rules: Vec<Rule> =
            serde_json::from_str(r#"[{"hostname":"a.com"},{"regexp":"^b"}]"#).unwrap();
        assert_eq!(
            rules,
            vec![Rule::Hostname("a.com".to_string()), Rule::Regexp("^b".to_string())]
        );
        assert_eq!(
            serde_json::to_string(&Rule::Pattern("x/*".to_string())).unwrap(),
            r#"{"pattern":"x/*"}"#
        );
    }

    #[test]
    fn test_build_matchers() {
        let url = Url::parse("https://example.com/blog/post1").unwrap();
        assert!(Rule::Hostname("example.com".into()).build().unwrap().matches(&url));
        assert!(Rule::Pattern("example.com/blog/*".into()).build().unwrap().matches(&url));
        assert!(Rule::Regexp("post\\d".into()).build().unwrap().matches(&url));
        assert!(Rule::Regexp("(".into()).build().is_err());
    }
}
