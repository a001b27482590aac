// src/main.rs
// =============================================================================
// This is the entry point of the link-scope CLI.
//
// What happens here:
// 1. Set up logging (to stderr, so stdout stays clean for piping)
// 2. Parse command-line arguments using clap
// 3. Load and compile the scope rules - a bad rule aborts before any URL
//    is looked at
// 4. Run the subcommand and exit with a proper code
//    (0 = all in scope, 1 = some URLs excluded/invalid, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, RuleArgs};
use link_scope::{Matcher, Scope};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "link_scope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { urls, rules, json } => {
            let scope = build_scope(&rules)?;
            handle_check(&scope, &urls, json)
        }
        Commands::Filter { rules } => {
            let scope = build_scope(&rules)?;
            handle_filter(&scope)
        }
    }
}

fn build_scope(args: &RuleArgs) -> Result<Scope> {
    let rules = args.to_scope_rules().context("failed to load scope rules")?;
    if rules.is_empty() {
        tracing::warn!("no scope rules given, every URL is in scope");
    }
    rules.compile().context("invalid scope rules")
}

// Outcome for one URL in a `check` report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Decision {
    Include,
    Exclude,
    /// The input could not be parsed as a URL
    Invalid,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    url: String,
    decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn classify(scope: &impl Matcher, input: &str) -> CheckResult {
    match Url::parse(input) {
        Ok(url) => CheckResult {
            url: input.to_string(),
            decision: if scope.matches(&url) {
                Decision::Include
            } else {
                Decision::Exclude
            },
            message: None,
        },
        Err(e) => CheckResult {
            url: input.to_string(),
            decision: Decision::Invalid,
            message: Some(e.to_string()),
        },
    }
}

fn handle_check(scope: &Scope, urls: &[String], json: bool) -> Result<i32> {
    let results: Vec<CheckResult> = urls.iter().map(|u| classify(scope, u)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    let all_included = results.iter().all(|r| r.decision == Decision::Include);
    Ok(if all_included { 0 } else { 1 })
}

// Streams stdin to stdout, keeping only in-scope URLs
fn handle_filter(scope: &Scope) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut kept = 0usize;
    let mut dropped = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match Url::parse(input) {
            Ok(url) if scope.matches(&url) => {
                writeln!(out, "{}", input)?;
                kept += 1;
            }
            Ok(_) => dropped += 1,
            Err(e) => {
                tracing::warn!(url = input, error = %e, "skipping unparsable URL");
                dropped += 1;
            }
        }
    }

    out.flush()?;
    tracing::info!(kept, dropped, "filter finished");
    Ok(0)
}

fn print_table(results: &[CheckResult]) {
    println!("{:<70} {:<10} {}", "URL", "DECISION", "MESSAGE");
    println!("{}", "=".repeat(100));

    for result in results {
        // Truncate URL if too long for display
        let url_display = if result.url.chars().count() > 67 {
            format!("{}...", result.url.chars().take(67).collect::<String>())
        } else {
            result.url.clone()
        };
        let message = result.message.as_deref().unwrap_or("");

        println!("{:<70} {:<10} {}", url_display, format_decision(&result.decision), message);
    }

    println!();

    let included = results.iter().filter(|r| r.decision == Decision::Include).count();
    println!("Summary: {} of {} URL(s) in scope", included, results.len());
}

fn format_decision(decision: &Decision) -> &'static str {
    match decision {
        Decision::Include => "INCLUDE",
        Decision::Exclude => "EXCLUDE",
        Decision::Invalid => "INVALID",
    }
}
