// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands share the same rule flags:
// - check:  classify the URLs given as arguments and print a report
// - filter: read URLs from stdin and print only the ones in scope, so a
//           crawler (or a shell pipeline) can use link-scope as a gate
//
// Rust concepts:
// - Derive macros: clap generates the parsing code from these structs
// - #[command(flatten)]: reuse one group of flags in several subcommands
// - value_parser: clap calls Rule::from_str for us on every --include/--exclude
// =============================================================================

use clap::{Args, Parser, Subcommand};
use link_scope::{Rule, RulesError, ScopeRules};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-scope",
    version = "0.1.0",
    about = "Decide which discovered links a crawler should follow",
    long_about = "link-scope matches URLs against hostname, glob and regexp rules. \
                  Patterns and regexps see only host + path: scheme and query are ignored."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify URLs and report which ones are in scope
    ///
    /// Example: link-scope check --include hostname:example.com https://example.com/a
    Check {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,

        #[command(flatten)]
        rules: RuleArgs,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Read URLs from stdin (one per line) and print those in scope
    ///
    /// Example: cat links.txt | link-scope filter --rules scope.json
    Filter {
        #[command(flatten)]
        rules: RuleArgs,
    },
}

/// Where scope rules come from. All sources are combined.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// JSON rules file with "include" and "exclude" lists
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Include rule, e.g. hostname:example.com, pattern:example.com/blog/*, regexp:^docs\.
    #[arg(long = "include", value_name = "KIND:VALUE", value_parser = parse_rule)]
    pub include: Vec<Rule>,

    /// Exclude rule, same syntax as --include
    #[arg(long = "exclude", value_name = "KIND:VALUE", value_parser = parse_rule)]
    pub exclude: Vec<Rule>,
}

impl RuleArgs {
    /// Loads the rules file (if any) and appends the flag rules to it.
    pub fn to_scope_rules(&self) -> Result<ScopeRules, RulesError> {
        let mut rules = match &self.rules {
            Some(path) => ScopeRules::load(path)?,
            None => ScopeRules::default(),
        };
        rules.merge(ScopeRules {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        });
        Ok(rules)
    }
}

fn parse_rule(s: &str) -> Result<Rule, RulesError> {
    s.parse()
}
