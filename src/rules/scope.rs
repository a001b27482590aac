// src/rules/scope.rs
// =============================================================================
// Include/exclude rule lists and the compiled Scope matcher.
//
// Life cycle:
// 1. Load ScopeRules from a JSON file and/or build them from CLI flags
// 2. compile() turns every rule into a matcher - a bad regexp stops here
// 3. The resulting Scope is an ordinary Matcher the crawler calls per URL
// =============================================================================

use super::Rule;
use crate::error::RulesError;
use crate::matcher::{AnyOf, Matcher};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Scope rules as written in a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeRules {
    /// URLs must match at least one of these (ignored when empty)
    pub include: Vec<Rule>,
    /// URLs matching any of these are dropped
    pub exclude: Vec<Rule>,
}

impl ScopeRules {
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads rules from a JSON file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        tracing::debug!(path = %path.display(), "loading scope rules");
        let json = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Appends the rules of `other` to these.
    pub fn merge(&mut self, other: ScopeRules) {
        self.include.extend(other.include);
        self.exclude.extend(other.exclude);
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Builds every rule's matcher. Stops at the first rule that fails.
    pub fn compile(&self) -> Result<Scope, RulesError> {
        let include = build_all(&self.include)?;
        let exclude = build_all(&self.exclude)?;

        tracing::info!(
            include = include.len(),
            exclude = exclude.len(),
            "compiled crawl scope"
        );

        Ok(Scope { include, exclude })
    }
}

fn build_all(rules: &[Rule]) -> Result<AnyOf, RulesError> {
    rules
        .iter()
        .map(|rule| rule.build().map_err(RulesError::from))
        .collect::<Result<Vec<_>, _>>()
        .map(AnyOf::new)
}

/// The compiled form of [`ScopeRules`].
///
/// In scope = (no include rules OR some include rule matches)
///            AND no exclude rule matches.
#[derive(Debug, Default)]
pub struct Scope {
    include: AnyOf,
    exclude: AnyOf,
}

impl Matcher for Scope {
    fn matches(&self, url: &Url) -> bool {
        let included = self.include.is_empty() || self.include.matches(url);
        included && !self.exclude.matches(url)
    }
}
