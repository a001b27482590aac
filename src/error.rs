// src/error.rs
// =============================================================================
// Error types for building matchers and scopes.
//
// All of these errors happen at setup time. Once a matcher exists, calling
// it can never fail - it always answers true or false.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while constructing a single matcher.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// The regular expression did not compile.
    #[error("invalid regexp {expr:?}: {source}")]
    InvalidRegexp {
        expr: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors returned while loading or compiling scope rules.
#[derive(Error, Debug)]
pub enum RulesError {
    /// The rules file could not be read.
    #[error("failed to read rules file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rules file is not valid JSON for ScopeRules.
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `kind:value` rule string could not be understood.
    #[error("invalid rule {0:?}: expected hostname:<host>, pattern:<glob> or regexp:<expr>")]
    InvalidRule(String),

    /// A rule parsed fine but its matcher could not be built.
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
