// src/rules/mod.rs
// =============================================================================
// Scope rules: crawl boundaries written down as data.
//
// A rules file looks like this:
//
//   {
//     "include": [
//       { "hostname": "example.com" },
//       { "pattern": "docs.example.com/v2/*" }
//     ],
//     "exclude": [
//       { "regexp": "\\.(pdf|zip)$" }
//     ]
//   }
//
// A URL is in scope when it matches at least one include rule (or there are
// no include rules at all) and matches no exclude rule.
//
// Submodules:
// - rule:  one rule (hostname / pattern / regexp) and how to build its matcher
// - scope: the include/exclude lists, loading them, and compiling them
// =============================================================================

mod rule;
mod scope;

pub use rule::Rule;
pub use scope::{Scope, ScopeRules};
